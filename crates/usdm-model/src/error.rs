use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{instance_type}.{field} is required")]
    MissingField {
        instance_type: &'static str,
        field: &'static str,
    },
    #[error("{instance_type}.{field} must be a finite number, got {value}")]
    NotFinite {
        instance_type: &'static str,
        field: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
