/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod orders;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ApiCredentials, ApiSecret, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ErrorKind,
    FuturesClient,
    FuturesError,
    ParamOrder,
    RequestSigner,
    Result,
    SignedPayload,
    classify,
};

pub use orders::{NullOrderLog, OrderLog, place_order};

// Re-export all types
pub use types::*;
