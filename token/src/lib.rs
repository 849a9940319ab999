//! Stateless bearer-token library
//!
//! Provides the token lifecycle for stateless request authentication:
//! - Signing key derivation from a base64 configuration secret
//! - Claim construction, signing, and verification (HS256 compact JWTs)
//! - Subject and expiration validation
//!
//! Services embed this crate behind their own request filters; it performs
//! no I/O and holds no per-request state, so one instance is shared across
//! concurrent requests without locking.
//!
//! # Examples
//!
//! ## Issuing and validating tokens
//! ```
//! use base64::engine::general_purpose::STANDARD;
//! use base64::Engine;
//! use chrono::Duration;
//! use token::TokenService;
//!
//! let secret = STANDARD.encode(b"an-example-secret-with-32-bytes!");
//! let service = TokenService::new(&secret, Duration::minutes(15), Duration::days(7)).unwrap();
//!
//! let token = service.generate_access_token("alice@example.com").unwrap();
//! assert_eq!(service.extract_subject(&token).unwrap(), "alice@example.com");
//! assert!(service.is_token_valid(&token, "alice@example.com"));
//! assert!(!service.is_token_valid(&token, "bob@example.com"));
//! ```
//!
//! ## Reading custom claims
//! ```
//! use std::collections::HashMap;
//!
//! use base64::engine::general_purpose::STANDARD;
//! use base64::Engine;
//! use chrono::Duration;
//! use token::TokenService;
//!
//! let secret = STANDARD.encode(b"an-example-secret-with-32-bytes!");
//! let service = TokenService::new(&secret, Duration::minutes(15), Duration::days(7)).unwrap();
//!
//! let mut extra = HashMap::new();
//! extra.insert("role".to_string(), serde_json::json!("admin"));
//! let token = service
//!     .generate_access_token_with_claims(extra, "alice@example.com")
//!     .unwrap();
//!
//! let role = service
//!     .codec()
//!     .extract_claim(&token, |claims| claims.extra.get("role").cloned())
//!     .unwrap();
//! assert_eq!(role, Some(serde_json::json!("admin")));
//! ```

pub mod jwt;
pub mod service;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::KeyError;
pub use jwt::SigningKey;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use service::TokenService;
