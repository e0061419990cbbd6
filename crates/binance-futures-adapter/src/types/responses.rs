/*
[INPUT]:  Classified API payloads
[OUTPUT]: Tagged API outcomes and normalized order results
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or normalized fields are added
*/

use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::{FuturesError, Result};

/// Raw JSON object returned by the exchange
pub type RawResponse = Map<String, Value>;

/// Result of one API call after HTTP and API level interpretation
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Success(RawResponse),
    Failure(ApiFailure),
}

/// Exchange-side rejection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFailure {
    pub http_status: u16,
    pub code: Option<i64>,
    pub message: String,
}

impl ApiOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    /// Lift a failure into [`FuturesError::Api`]
    pub fn into_result(self) -> Result<RawResponse> {
        match self {
            ApiOutcome::Success(raw) => Ok(raw),
            ApiOutcome::Failure(failure) => Err(failure.into()),
        }
    }

    /// JSON view used for order log records
    pub fn to_json(&self) -> Value {
        match self {
            ApiOutcome::Success(raw) => Value::Object(raw.clone()),
            ApiOutcome::Failure(failure) => serde_json::json!({
                "httpStatus": failure.http_status,
                "code": failure.code,
                "msg": failure.message,
            }),
        }
    }
}

impl From<ApiFailure> for FuturesError {
    fn from(failure: ApiFailure) -> Self {
        FuturesError::Api {
            status: failure.http_status,
            code: failure.code,
            message: failure.message,
        }
    }
}

/// Stable summary of a placed order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: Option<Value>,
    pub status: String,
    pub executed_qty: String,
    pub avg_price: Option<String>,
    pub raw_response: RawResponse,
}

impl OrderResult {
    pub const DEFAULT_STATUS: &'static str = "UNKNOWN";
    pub const DEFAULT_EXECUTED_QTY: &'static str = "0";

    /// Normalize a successful order payload. Missing or null fields get
    /// the documented defaults; `avgPrice` has none.
    pub fn from_success(raw: RawResponse) -> Self {
        let order_id = present(&raw, "orderId").cloned();
        let status = text_field(&raw, "status").unwrap_or_else(|| Self::DEFAULT_STATUS.into());
        let executed_qty =
            text_field(&raw, "executedQty").unwrap_or_else(|| Self::DEFAULT_EXECUTED_QTY.into());
        let avg_price = text_field(&raw, "avgPrice");

        Self {
            order_id,
            status,
            executed_qty,
            avg_price,
            raw_response: raw,
        }
    }

    /// Order id rendered for display
    pub fn order_id_display(&self) -> String {
        match &self.order_id {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => "N/A".to_string(),
        }
    }
}

fn present<'a>(raw: &'a RawResponse, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| !value.is_null())
}

fn text_field(raw: &RawResponse, key: &str) -> Option<String> {
    present(raw, key).map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}
