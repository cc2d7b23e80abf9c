#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Missing required fields: {}", .required.join(", "))]
    MissingFields { required: &'static [&'static str] },

    #[error("Validation failed: {0}")]
    Validation(String),
}
