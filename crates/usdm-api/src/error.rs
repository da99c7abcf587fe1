use thiserror::Error;
use usdm_model::ModelError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("id {id} is already in use (while creating {instance_type})")]
    DuplicateId { instance_type: String, id: String },

    #[error("invalid {instance_type}: {source}")]
    Invalid {
        instance_type: &'static str,
        #[source]
        source: ModelError,
    },

    #[error("invalid date {value:?}, expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;
