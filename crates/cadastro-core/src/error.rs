use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid field: {value} {location}")]
    InvalidField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid record id: {value} {location}")]
    InvalidRecordId {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
