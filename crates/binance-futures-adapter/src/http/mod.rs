/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod response;
pub mod signature;
pub mod trade;

pub use error::{ErrorKind, FuturesError, Result};
pub use response::classify;
pub use signature::{ParamOrder, RequestSigner, SignedPayload};

pub use client::{API_KEY_HEADER, ClientConfig, DEFAULT_BASE_URL, FuturesClient};
pub use trade::NEW_ORDER_ENDPOINT;
