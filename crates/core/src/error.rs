#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Store unavailable")]
    StoreUnavailable,
}
