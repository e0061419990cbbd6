/*
[INPUT]:  Validated order requests
[OUTPUT]: Classified order placement outcomes
[POS]:    HTTP layer - trading endpoints (require API key + HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{FuturesClient, Result};
use crate::types::{ApiOutcome, OrderRequest};

/// New order endpoint (USDT-M futures)
pub const NEW_ORDER_ENDPOINT: &str = "/fapi/v1/order";

impl FuturesClient {
    /// Place a new order
    ///
    /// POST /fapi/v1/order
    /// Requires: X-MBX-APIKEY header + HMAC signature
    pub async fn place_order(&self, request: &OrderRequest) -> Result<ApiOutcome> {
        self.post(NEW_ORDER_ENDPOINT, &request.to_params(), true)
            .await
    }
}
