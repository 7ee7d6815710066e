use crate::{FieldKind, RecordId, SubmitOutcome, UserRecord};

/// Every user action the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// The text of one input changed (a keystroke or a paste).
    SetField { kind: FieldKind, text: String },
    Submit,
    BeginEdit(RecordId),
    RequestDelete(RecordId),
    ConfirmDelete,
    CancelDelete,
}

/// Result of [`FormState::apply`](crate::FormState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    FieldUpdated { kind: FieldKind, value: String },
    Submitted(SubmitOutcome),
    /// `false` when the id is not in the store.
    EditStarted(bool),
    /// `false` when the id is not in the store.
    DeleteRequested(bool),
    Deleted(Option<UserRecord>),
    DeleteCancelled,
}
