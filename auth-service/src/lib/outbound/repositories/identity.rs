use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::IdentityRepository;

/// In-memory identity directory keyed by email address.
///
/// The directory is immutable after construction; lookups never fail, an
/// unknown principal simply resolves to `None`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityRepository {
    identities: HashMap<String, Identity>,
}

impl InMemoryIdentityRepository {
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        let identities = identities
            .into_iter()
            .map(|identity| (identity.identifier().to_string(), identity))
            .collect();

        Self { identities }
    }

    /// Build a directory from raw email addresses
    ///
    /// # Errors
    /// Returns `IdentityError::InvalidEmail` if any address fails validation
    pub fn from_emails(
        emails: impl IntoIterator<Item = String>,
    ) -> Result<Self, IdentityError> {
        let identities = emails
            .into_iter()
            .map(|raw| {
                let email = EmailAddress::new(&raw)?;
                Ok(Identity::new(email))
            })
            .collect::<Result<Vec<_>, IdentityError>>()?;

        Ok(Self::new(identities))
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        Ok(self.identities.get(email).cloned())
    }
}
