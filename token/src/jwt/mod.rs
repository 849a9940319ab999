pub mod claims;
pub mod codec;
pub mod errors;
pub mod keys;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use errors::KeyError;
pub use errors::TokenError;
pub use keys::SigningKey;
