use thiserror::Error;

/// Error type for token build and parse operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is not decodable: {0}")]
    Malformed(String),

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}

/// Error type for signing key derivation.
///
/// Any of these is fatal at startup: a service without a usable signing
/// key must not begin accepting requests.
#[derive(Debug, Clone, Error)]
pub enum KeyError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Signing secret is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Signing secret too short: minimum {min} bytes of key material, got {actual}")]
    TooShort { min: usize, actual: usize },
}
