use crate::{
    CPF_MAX_INPUT_LEN, CoreError, PHONE_MAX_INPUT_LEN, Result as CoreErrorResult, format_cpf,
    format_phone,
};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Cpf,
}

impl FieldKind {
    /// All fields, in form order.
    pub const ALL: [FieldKind; 4] = [Self::Name, Self::Phone, Self::Email, Self::Cpf];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Cpf => "cpf",
        }
    }

    /// Placeholder shown on the empty input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Phone => "Telefone",
            Self::Email => "Email",
            Self::Cpf => "CPF",
        }
    }

    /// Maximum number of characters the input accepts, if bounded.
    pub fn max_input_len(&self) -> Option<usize> {
        match self {
            Self::Phone => Some(PHONE_MAX_INPUT_LEN),
            Self::Cpf => Some(CPF_MAX_INPUT_LEN),
            Self::Name | Self::Email => None,
        }
    }

    /// Turn the text the input currently holds into the value the form stores.
    ///
    /// Clamps to [`max_input_len`](Self::max_input_len) first, then live-formats
    /// phone and CPF. Name and email are stored as typed.
    pub fn apply_keystroke(&self, text: &str) -> String {
        let clamped: String = match self.max_input_len() {
            Some(max) => text.chars().take(max).collect(),
            None => text.to_string(),
        };

        match self {
            Self::Phone => format_phone(&clamped),
            Self::Cpf => format_cpf(&clamped),
            Self::Name | Self::Email => clamped,
        }
    }
}

impl FromStr for FieldKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "name" | "nome" => Ok(Self::Name),
            "phone" | "telefone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "cpf" => Ok(Self::Cpf),
            _ => Err(CoreError::InvalidField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
