//! Stored user entry.

use crate::{RecordId, UserFields, format_cpf, format_phone};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    /// `(DD) DDDDD-DDDD`, or the bare digits when the count is off
    pub phone: String,
    pub email: String,
    /// `DDD.DDD.DDD-DD`, or the bare digits when the count is off
    pub cpf: String,
}

impl UserRecord {
    /// Build a record from submitted form values.
    ///
    /// Phone and CPF are formatted again here; formatting is idempotent so
    /// values already formatted while typing come out unchanged.
    pub fn from_fields(id: RecordId, fields: &UserFields) -> Self {
        Self {
            id,
            name: fields.name.clone(),
            phone: format_phone(&fields.phone),
            email: fields.email.clone(),
            cpf: format_cpf(&fields.cpf),
        }
    }

    /// Copy of the four values, as loaded back into the form for editing.
    pub fn fields(&self) -> UserFields {
        UserFields::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.cpf.clone(),
        )
    }
}
