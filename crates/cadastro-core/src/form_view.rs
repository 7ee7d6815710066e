use crate::{RecordId, UserFields, UserRecord};

use serde::Serialize;

/// Whether the form creates a new record or updates the edit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Cadastrar Usuário",
            Self::Edit => "Editar Usuário",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Cadastrar",
            Self::Edit => "Atualizar",
        }
    }
}

/// Everything a rendering layer needs to redraw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub mode: FormMode,
    pub fields: UserFields,
    pub records: Vec<UserRecord>,
    pub editing: Option<RecordId>,
    pub pending_delete: Option<RecordId>,
    pub dialog_visible: bool,
}
