/*
[INPUT]:  Message bytes and API secret
[OUTPUT]: HMAC-SHA256 signatures as lowercase hex
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or digest encoding
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::ApiSecret;
use crate::http::{FuturesError, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed with the account secret
#[derive(Clone)]
pub struct HmacSigner {
    mac: HmacSha256,
}

impl HmacSigner {
    /// Create a signer; the key schedule is computed once here
    pub fn new(secret: &ApiSecret) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.expose_bytes())
            .map_err(|err| FuturesError::Config(format!("invalid HMAC key: {err}")))?;
        Ok(Self { mac })
    }

    /// Sign a message and return the lowercase hex digest
    pub fn sign(&self, message: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a hex signature against a message
    pub fn verify(&self, message: &[u8], signature_hex: &str) -> bool {
        let Ok(expected) = hex::decode(signature_hex) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}
