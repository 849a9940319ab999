use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;

/// Read-side port onto the identity directory.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Look up a principal by email address
    ///
    /// # Arguments
    /// * `email` - directory identifier of the principal
    ///
    /// # Returns
    /// `Ok(Some(identity))` when the principal is known, `Ok(None)` when it
    /// is not. An unknown principal is an ordinary outcome, not an error.
    ///
    /// # Errors
    /// Returns `IdentityError::LookupFailed` only when the directory itself
    /// cannot be consulted
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError>;
}
