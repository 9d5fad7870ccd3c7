use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Not found: {0}")]
    NotFound(String),
    
    /// The record store rejected or failed a read, write or delete
    #[error("Collaborator failure: {0}")]
    CollaboratorFailure(String),
    
    /// KYC documents were deleted but the status write never committed
    #[error("Partial failure: {0}")]
    PartialFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type AdminResult<T> = Result<T, AdminError>;
