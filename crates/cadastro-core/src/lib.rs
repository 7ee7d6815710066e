//! Formatting rules and record management for the user registration form.
//!
//! The rendering layer feeds raw keystrokes and button presses into
//! [`FormState`] and redraws from [`FormView`].

mod error;
mod field_kind;
mod form_action;
mod form_state;
mod form_view;
mod formatter;
mod record_id;
mod record_store;
mod submit_outcome;
mod user_fields;
mod user_record;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use field_kind::FieldKind;
pub use form_action::{ActionOutcome, FormAction};
pub use form_state::FormState;
pub use form_view::{FormMode, FormView};
pub use formatter::{digits_only, format_cpf, format_phone, is_valid_email};
pub use record_id::RecordId;
pub use record_store::RecordStore;
pub use submit_outcome::{RejectReason, SubmitOutcome};
pub use user_fields::UserFields;
pub use user_record::UserRecord;

/// Digits kept from a phone entry (2 area + 5 prefix + 4 line).
pub const PHONE_MAX_DIGITS: usize = 11;
/// Digits kept from a CPF entry.
pub const CPF_MAX_DIGITS: usize = 11;
/// Longest text the phone input accepts, `(DD) DDDDD-DDDD`.
pub const PHONE_MAX_INPUT_LEN: usize = 15;
/// Longest text the CPF input accepts, `DDD.DDD.DDD-DD`.
pub const CPF_MAX_INPUT_LEN: usize = 14;
