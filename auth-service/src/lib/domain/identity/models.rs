use std::fmt::Display;
use std::str::FromStr;

use crate::domain::identity::errors::EmailError;

/// A principal known to the identity directory.
///
/// The email address doubles as the principal's unique identifier and is
/// the value carried in the `sub` claim of issued tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: EmailAddress,
}

impl Identity {
    pub fn new(email: EmailAddress) -> Self {
        Self { email }
    }

    /// The directory identifier for this principal.
    pub fn identifier(&self) -> &str {
        self.email.as_str()
    }
}

/// A validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate a raw string as an email address
    ///
    /// # Arguments
    /// * `raw` - candidate email address
    ///
    /// # Errors
    /// Returns `EmailError::InvalidFormat` if the string is not a
    /// syntactically valid email address
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let parsed = email_address::EmailAddress::from_str(raw)
            .map_err(|_| EmailError::InvalidFormat(raw.to_string()))?;
        Ok(Self(parsed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
