use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim names the codec owns; caller-supplied values under these names
/// are dropped so the reserved values always win.
pub const RESERVED_CLAIMS: [&str; 3] = ["sub", "iat", "exp"];

/// Verified claim set carried by a signed token.
///
/// `sub`, `iat`, and `exp` are always present: every token this service
/// issues carries them, and a presented token missing any of them fails
/// deserialization and is reported as malformed. Custom claims ride in
/// `extra`, flattened into the payload next to the reserved names.
///
/// Claim sets are values: constructed once, never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the authenticated identity, e.g. an email address)
    pub sub: String,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Additional custom claims (flattened into the payload)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create a claim set with the three reserved claims.
    pub fn new(subject: impl ToString, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at,
            exp: expires_at,
            extra: HashMap::new(),
        }
    }

    /// Add a custom claim.
    ///
    /// Reserved names (`sub`, `iat`, `exp`) and unserializable values are
    /// ignored.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        let key = key.to_string();
        if RESERVED_CLAIMS.contains(&key.as_str()) {
            return self;
        }
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key, json_value);
        }
        self
    }

    /// Issued-at instant, if the timestamp is representable.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    /// Expiration instant, if the timestamp is representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the claim set's temporal validity has lapsed.
    ///
    /// A token is valid only while `exp` is strictly in the future, so a
    /// token expiring exactly now is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
