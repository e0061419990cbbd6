/*
[INPUT]:  Futures client, validated order request, order log sink
[OUTPUT]: Normalized order results or typed failures
[POS]:    Order layer - placement flow decoupled from CLI and log storage
[UPDATE]: When the placement flow or log record format changes
*/

use tracing::warn;

use crate::http::{FuturesClient, Result};
use crate::types::{OrderRequest, OrderResult, OrderType};

/// Sink for per-order-type request/response records.
///
/// Each call appends one logical record.
pub trait OrderLog {
    fn write(&mut self, order_type: OrderType, record: &str) -> std::io::Result<()>;
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOrderLog;

impl OrderLog for NullOrderLog {
    fn write(&mut self, _order_type: OrderType, _record: &str) -> std::io::Result<()> {
        Ok(())
    }
}

/// Place an order, recording the payload and the outcome in `log`.
///
/// Exchange rejections come back as [`crate::FuturesError::Api`]. Only the
/// payload record is allowed to abort; once the request is on the wire, log
/// failures are reported through `tracing` and the exchange outcome wins.
pub async fn place_order(
    client: &FuturesClient,
    request: &OrderRequest,
    log: &mut dyn OrderLog,
) -> Result<OrderResult> {
    let order_type = request.order_type();
    let payload = serde_json::to_string(&request.to_params())?;
    log.write(order_type, &format!("Placing order with payload: {payload}"))?;

    let outcome = match client.place_order(request).await {
        Ok(outcome) => outcome,
        Err(err) => {
            record_after_send(log, order_type, &format!("Order failed: {err}"));
            return Err(err);
        }
    };

    record_after_send(
        log,
        order_type,
        &format!("Order response: {}", outcome.to_json()),
    );
    let raw = outcome.into_result()?;
    Ok(OrderResult::from_success(raw))
}

fn record_after_send(log: &mut dyn OrderLog, order_type: OrderType, record: &str) {
    if let Err(err) = log.write(order_type, record) {
        warn!(%order_type, error = %err, "failed to write order log record");
    }
}
