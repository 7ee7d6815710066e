mod record_store;

use crate::UserFields;

pub(crate) fn ana() -> UserFields {
    UserFields::new("Ana", "11987654321", "ana@example.com", "12345678901")
}

pub(crate) fn bruno() -> UserFields {
    UserFields::new("Bruno", "21912345678", "bruno@example.com", "98765432100")
}
