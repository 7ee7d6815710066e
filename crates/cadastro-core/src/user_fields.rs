use crate::FieldKind;

use serde::{Deserialize, Serialize};

/// The four editable values currently held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub cpf: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        cpf: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            cpf: cpf.into(),
        }
    }

    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Phone => &self.phone,
            FieldKind::Email => &self.email,
            FieldKind::Cpf => &self.cpf,
        }
    }

    pub fn set(&mut self, kind: FieldKind, value: String) {
        match kind {
            FieldKind::Name => self.name = value,
            FieldKind::Phone => self.phone = value,
            FieldKind::Email => self.email = value,
            FieldKind::Cpf => self.cpf = value,
        }
    }

    /// First field, in form order, that is still empty.
    pub fn first_empty(&self) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| self.get(*kind).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
