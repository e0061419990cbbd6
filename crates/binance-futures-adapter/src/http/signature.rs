/*
[INPUT]:  Request parameters and HMAC signer
[OUTPUT]: Signed form bodies (query string + &signature=<hex>)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing canonical encoding or injected parameters
*/

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::HmacSigner;
use crate::http::{FuturesError, Result};
use crate::types::RequestParams;

pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;
pub const TIMESTAMP_PARAM: &str = "timestamp";
pub const RECV_WINDOW_PARAM: &str = "recvWindow";
pub const SIGNATURE_PARAM: &str = "signature";

const SIGNATURE_SEPARATOR: &str = "&signature=";

/// Parameter ordering used for the canonical encoding.
///
/// The encoded string is both signed and transmitted, so either order
/// produces a valid signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamOrder {
    /// Caller order, then `timestamp`, then `recvWindow`
    #[default]
    Insertion,
    /// Lexicographic by key after injection
    Sorted,
}

/// A signed request body, valid only for the single request it was built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    body: String,
    query_len: usize,
}

impl SignedPayload {
    /// Full body to transmit, signature last
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The exact string the signature was computed over
    pub fn signed_query(&self) -> &str {
        &self.body[..self.query_len]
    }

    pub fn signature(&self) -> &str {
        &self.body[self.query_len + SIGNATURE_SEPARATOR.len()..]
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

/// Signs request parameters for `SIGNED` endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    signer: HmacSigner,
    recv_window_ms: u64,
    order: ParamOrder,
}

impl RequestSigner {
    pub fn new(signer: HmacSigner) -> Self {
        Self {
            signer,
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            order: ParamOrder::default(),
        }
    }

    /// Window injected when the caller did not supply `recvWindow`
    pub fn with_recv_window(mut self, recv_window_ms: u64) -> Self {
        self.recv_window_ms = recv_window_ms;
        self
    }

    pub fn with_order(mut self, order: ParamOrder) -> Self {
        self.order = order;
        self
    }

    /// Sign with the current wall-clock timestamp
    pub fn sign(&self, params: &RequestParams) -> Result<SignedPayload> {
        self.sign_at(params, Utc::now().timestamp_millis())
    }

    /// Sign with an explicit timestamp (milliseconds since epoch)
    pub fn sign_at(&self, params: &RequestParams, timestamp_ms: i64) -> Result<SignedPayload> {
        if params.contains(SIGNATURE_PARAM) {
            return Err(FuturesError::validation(
                "Request parameters must not contain 'signature'.",
            ));
        }

        let mut params = params.clone();
        params.insert(TIMESTAMP_PARAM, timestamp_ms);
        if !params.contains(RECV_WINDOW_PARAM) {
            params.insert(RECV_WINDOW_PARAM, self.recv_window_ms);
        }
        if self.order == ParamOrder::Sorted {
            params.sort_by_key();
        }

        let query = params.to_query_string();
        let signature = self.signer.sign(query.as_bytes());
        let query_len = query.len();

        let mut body = query;
        body.reserve(SIGNATURE_SEPARATOR.len() + signature.len());
        body.push_str(SIGNATURE_SEPARATOR);
        body.push_str(&signature);

        Ok(SignedPayload { body, query_len })
    }

    /// Check that a transmitted body carries a valid signature for its prefix
    pub fn verify(&self, body: &str) -> bool {
        match body.rsplit_once(SIGNATURE_SEPARATOR) {
            Some((query, signature)) => self.signer.verify(query.as_bytes(), signature),
            None => false,
        }
    }
}
