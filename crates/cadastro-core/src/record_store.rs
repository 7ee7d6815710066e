use crate::{RecordId, UserFields, UserRecord};

use log::debug;

/// Ordered, in-memory list of user records.
///
/// Records keep their insertion order; replacing one keeps its position.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<UserRecord>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record built from `fields` and return its new id.
    pub fn append(&mut self, fields: &UserFields) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        self.records.push(UserRecord::from_fields(id, fields));
        debug!("Appended record {} ({} total)", id, self.records.len());
        id
    }

    /// Replace the record with `id`, keeping id and position.
    ///
    /// Returns `false` when no record has that id.
    pub fn replace(&mut self, id: RecordId, fields: &UserFields) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                *record = UserRecord::from_fields(id, fields);
                debug!("Replaced record {}", id);
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: RecordId) -> Option<UserRecord> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        debug!("Removed record {} ({} left)", id, self.records.len());
        Some(removed)
    }

    pub fn get(&self, id: RecordId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
