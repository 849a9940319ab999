use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::KeyError;

/// Minimum decoded key material for HS256.
///
/// Shorter secrets would be silently accepted by the underlying HMAC, so
/// the floor is enforced here at derivation time.
pub const MIN_SECRET_BYTES: usize = 32;

/// Symmetric signing key derived from the configured base64 secret.
///
/// Derived once at startup and shared read-only for the process lifetime;
/// the same material signs and verifies. The raw bytes are dropped after
/// the encoding and decoding keys are built, and the type implements
/// neither `Debug` nor `Serialize` so the material cannot leak through
/// logging or serialization.
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Derive the signing key from a standard-base64 encoded secret.
    ///
    /// # Arguments
    /// * `secret` - Base64 encoding of the raw symmetric key material
    ///
    /// # Returns
    /// SigningKey usable for both signing and verification
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `InvalidBase64` - Secret does not decode as base64
    /// * `TooShort` - Decoded material is under 32 bytes
    pub fn from_base64_secret(secret: &str) -> Result<Self, KeyError> {
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(KeyError::MissingSecret);
        }

        let key_bytes = BASE64
            .decode(secret)
            .map_err(|e| KeyError::InvalidBase64(e.to_string()))?;

        if key_bytes.len() < MIN_SECRET_BYTES {
            return Err(KeyError::TooShort {
                min: MIN_SECRET_BYTES,
                actual: key_bytes.len(),
            });
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(&key_bytes),
            decoding: DecodingKey::from_secret(&key_bytes),
        })
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}
