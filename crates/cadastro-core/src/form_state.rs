//! Form state machine.
//!
//! Delete flow: `Idle -> request_delete -> PendingConfirmation`, then
//! `confirm_delete` or `cancel_delete` back to `Idle`. Requesting again while
//! pending swaps the target.

use crate::{
    ActionOutcome, FieldKind, FormAction, FormMode, FormView, RecordId, RecordStore,
    RejectReason, SubmitOutcome, UserFields, UserRecord, is_valid_email,
};

use log::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct FormState {
    store: RecordStore,
    fields: UserFields,
    editing: Option<RecordId>,
    pending_delete: Option<RecordId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn fields(&self) -> &UserFields {
        &self.fields
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Dispatch one user action to its transition.
    pub fn apply(&mut self, action: FormAction) -> ActionOutcome {
        match action {
            FormAction::SetField { kind, text } => {
                let value = self.set_field(kind, &text).to_string();
                ActionOutcome::FieldUpdated { kind, value }
            }
            FormAction::Submit => ActionOutcome::Submitted(self.submit()),
            FormAction::BeginEdit(id) => ActionOutcome::EditStarted(self.begin_edit(id).is_some()),
            FormAction::RequestDelete(id) => ActionOutcome::DeleteRequested(self.request_delete(id)),
            FormAction::ConfirmDelete => ActionOutcome::Deleted(self.confirm_delete()),
            FormAction::CancelDelete => {
                self.cancel_delete();
                ActionOutcome::DeleteCancelled
            }
        }
    }

    /// Store new input text for one field, live-formatting phone and CPF.
    ///
    /// Returns the value the field now holds.
    pub fn set_field(&mut self, kind: FieldKind, text: &str) -> &str {
        let value = kind.apply_keystroke(text);
        self.fields.set(kind, value);
        self.fields.get(kind)
    }

    /// Create a record, or update the edit target, from the current fields.
    ///
    /// Rejected submissions change nothing. Accepted ones clear the fields
    /// and the edit target.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(kind) = self.fields.first_empty() {
            debug!("Submit rejected: {} is empty", kind);
            return SubmitOutcome::Rejected(RejectReason::EmptyField(kind));
        }

        if !is_valid_email(&self.fields.email) {
            debug!("Submit rejected: invalid email");
            return SubmitOutcome::Rejected(RejectReason::InvalidEmail);
        }

        let outcome = match self.editing {
            Some(id) => {
                if !self.store.replace(id, &self.fields) {
                    warn!("Edit target {} is gone, dropping edit mode", id);
                    self.editing = None;
                    return SubmitOutcome::Rejected(RejectReason::UnknownRecord(id));
                }
                info!("Updated record {}", id);
                SubmitOutcome::Updated(id)
            }
            None => {
                let id = self.store.append(&self.fields);
                info!("Created record {}", id);
                SubmitOutcome::Created(id)
            }
        };

        self.editing = None;
        self.fields.clear();
        outcome
    }

    /// Load a record into the form and make it the edit target.
    pub fn begin_edit(&mut self, id: RecordId) -> Option<&UserFields> {
        let Some(record) = self.store.get(id) else {
            debug!("Edit ignored: no record {}", id);
            return None;
        };

        self.fields = record.fields();
        self.editing = Some(id);
        debug!("Editing record {}", id);
        Some(&self.fields)
    }

    /// Stage a record for deletion and open the confirmation step.
    ///
    /// Returns `false` (and leaves any pending target alone) when the id is
    /// not in the store.
    pub fn request_delete(&mut self, id: RecordId) -> bool {
        if !self.store.contains(id) {
            debug!("Delete request ignored: no record {}", id);
            return false;
        }

        if let Some(previous) = self.pending_delete.replace(id) {
            debug!("Pending delete moved from {} to {}", previous, id);
        } else {
            debug!("Pending delete {}", id);
        }
        true
    }

    /// Remove the staged record.
    ///
    /// Deleting the edit target also leaves edit mode and empties the form.
    pub fn confirm_delete(&mut self) -> Option<UserRecord> {
        let id = self.pending_delete.take()?;
        let removed = self.store.remove(id);

        if self.editing == Some(id) {
            self.editing = None;
            self.fields.clear();
        }

        if removed.is_some() {
            info!("Deleted record {}", id);
        }
        removed
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            debug!("Delete of {} cancelled", id);
        }
    }

    /// Snapshot for the rendering layer.
    pub fn view(&self) -> FormView {
        FormView {
            mode: self.mode(),
            fields: self.fields.clone(),
            records: self.store.records().to_vec(),
            editing: self.editing,
            pending_delete: self.pending_delete,
            dialog_visible: self.pending_delete.is_some(),
        }
    }
}
