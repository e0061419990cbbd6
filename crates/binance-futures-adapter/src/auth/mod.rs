/*
[INPUT]:  API key/secret material
[OUTPUT]: Credentials and HMAC signatures
[POS]:    Auth layer - handles Binance signed-endpoint authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::{API_KEY_ENV, API_SECRET_ENV, ApiCredentials, ApiSecret};
pub use signer::HmacSigner;
