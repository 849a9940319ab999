use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::KeyError;
use crate::jwt::SigningKey;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;

/// Token issuance and validation coordinator.
///
/// Owns the codec plus the configured access and refresh lifetimes.
/// Access and refresh tokens share structure and signing key; they differ
/// only in the expiration distance stamped at build time.
pub struct TokenService {
    codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Create a token service from the configured secret and lifetimes.
    ///
    /// # Arguments
    /// * `secret_base64` - Base64-encoded symmetric signing secret
    /// * `access_ttl` - Access-token lifetime
    /// * `refresh_ttl` - Refresh-token lifetime
    ///
    /// # Returns
    /// Configured TokenService instance
    ///
    /// # Errors
    /// * `KeyError` - Secret is missing, undecodable, or too short;
    ///   fatal at startup
    pub fn new(
        secret_base64: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self, KeyError> {
        let key = SigningKey::from_base64_secret(secret_base64)?;
        Ok(Self {
            codec: TokenCodec::new(key),
            access_ttl,
            refresh_ttl,
        })
    }

    /// Issue an access token for `subject`.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn generate_access_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec.build_token(HashMap::new(), subject, self.access_ttl)
    }

    /// Issue an access token for `subject` carrying extra claims.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn generate_access_token_with_claims(
        &self,
        extra_claims: HashMap<String, serde_json::Value>,
        subject: &str,
    ) -> Result<String, TokenError> {
        self.codec.build_token(extra_claims, subject, self.access_ttl)
    }

    /// Issue a refresh token for `subject`.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn generate_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec.build_token(HashMap::new(), subject, self.refresh_ttl)
    }

    /// Subject the token was issued for.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed or its signature does not match
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.codec.extract_subject(token)
    }

    /// Whether `token` is currently valid for `expected_subject`.
    ///
    /// True iff the signature verifies, the subject matches, and the
    /// expiration is strictly in the future. Pure predicate that fails
    /// closed: any parse failure is `false`, never a default `true`.
    pub fn is_token_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.codec.parse(token) {
            Ok(claims) => {
                claims.sub == expected_subject && !claims.is_expired(Utc::now().timestamp())
            }
            Err(_) => false,
        }
    }

    /// Whether the token's temporal validity has lapsed.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed or its signature does not match
    pub fn is_token_expired(&self, token: &str) -> Result<bool, TokenError> {
        let claims = self.codec.parse(token)?;
        Ok(claims.is_expired(Utc::now().timestamp()))
    }

    /// Parse the token, additionally requiring it to be unexpired.
    ///
    /// For callers that must distinguish "valid signature, lapsed time"
    /// from "never valid".
    ///
    /// # Errors
    /// * `Expired` - Signature verifies but the expiration has lapsed
    /// * `TokenError` - Token is malformed or its signature does not match
    pub fn decode_valid(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.codec.parse(token)?;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Access the underlying codec for claim-level reads.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
