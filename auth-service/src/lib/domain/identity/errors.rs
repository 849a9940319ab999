use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EmailError {
    #[error("invalid email address: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
    #[error("identity lookup failed: {0}")]
    LookupFailed(String),
}
