use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Roll {id} is already removed")]
    AlreadyRemoved { id: DbId },

    #[error("Invalid range format for {field}: '{value}' (expected '<start>-<end>')")]
    InvalidRangeFormat { field: &'static str, value: String },

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
