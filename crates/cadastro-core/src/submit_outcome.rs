use crate::{FieldKind, RecordId};

use serde::Serialize;

/// What a submit did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// Nothing changed: not a failure, the form just stays as it is.
    Rejected(RejectReason),
}

/// Why a submit left everything untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    EmptyField(FieldKind),
    InvalidEmail,
    /// The edit target is no longer in the store.
    UnknownRecord(RecordId),
}

impl SubmitOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(kind) => write!(f, "{} is empty", kind),
            Self::InvalidEmail => write!(f, "email is missing '@'"),
            Self::UnknownRecord(id) => write!(f, "record {} no longer exists", id),
        }
    }
}
