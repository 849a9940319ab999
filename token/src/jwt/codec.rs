use std::collections::HashMap;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use super::keys::SigningKey;

/// Builds and parses signed compact tokens.
///
/// Tokens are standard three-segment JWTs (header.payload.signature,
/// base64url) signed with HS256, so any JWT-consuming client can verify
/// them. Parsing is a structural check only: the signature is verified,
/// expiration is not. A verified-but-expired token is structurally valid
/// and its claims are trustworthy; only its temporal validity has lapsed,
/// which is a separate check owned by the caller.
pub struct TokenCodec {
    key: SigningKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec over the given signing key.
    ///
    /// The key is shared between signing and verification (symmetric
    /// HS256) and is immutable for the codec's lifetime.
    pub fn new(key: SigningKey) -> Self {
        Self {
            key,
            algorithm: Algorithm::HS256,
        }
    }

    /// Build and sign a token for `subject`, expiring `ttl` from now.
    ///
    /// The claim set carries `sub = subject`, `iat = now`, and
    /// `exp = now + ttl`, plus the caller's extra claims. Extra claims
    /// colliding with the reserved names are dropped; the reserved values
    /// always win.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn build_token(
        &self,
        extra_claims: HashMap<String, serde_json::Value>,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let mut claims = Claims::new(subject, now.timestamp(), expires_at.timestamp());
        for (name, value) in extra_claims {
            claims = claims.with_extra(name, value);
        }

        encode(&Header::new(self.algorithm), &claims, self.key.encoding())
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode a token and verify its signature against the current key.
    ///
    /// Succeeds for expired tokens; expiration is a semantic check the
    /// caller performs on the returned claim set.
    ///
    /// # Errors
    /// * `InvalidSignature` - Recomputed signature does not match the
    ///   embedded one
    /// * `Malformed` - Token string is not decodable
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, self.key.decoding(), &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Parse the token and apply `resolver` to the verified claim set.
    ///
    /// The indirection lets any future claim (roles, scopes, tenant id)
    /// be read without touching the decoding path. Errors propagate
    /// unchanged from [`TokenCodec::parse`].
    pub fn extract_claim<T>(
        &self,
        token: &str,
        resolver: impl FnOnce(&Claims) -> T,
    ) -> Result<T, TokenError> {
        let claims = self.parse(token)?;
        Ok(resolver(&claims))
    }

    /// Subject the token was issued for.
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.extract_claim(token, |claims| claims.sub.clone())
    }

    /// Expiration instant embedded in the token.
    pub fn extract_expiration(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.extract_claim(token, Claims::expires_at)?
            .ok_or_else(|| TokenError::Malformed("expiration timestamp out of range".to_string()))
    }
}
