/*
[INPUT]:  Resolved settings, credentials, validated order request
[OUTPUT]: Normalized order result with request/response records on disk
[POS]:    Orchestration - wires client, file log and placement flow
[UPDATE]: When the submission sequence changes
*/

use binance_futures_adapter::{
    ApiCredentials, FuturesClient, OrderRequest, OrderResult, Result, place_order,
};
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::order_log::FileOrderLog;

/// Submit one order against the configured endpoint
pub async fn submit_order(
    config: &BotConfig,
    credentials: ApiCredentials,
    request: &OrderRequest,
) -> Result<OrderResult> {
    config.validate()?;
    let client = FuturesClient::with_config(credentials, config.client_config())?;
    let mut log = FileOrderLog::new(&config.log_dir);

    info!(
        symbol = request.symbol(),
        side = %request.side(),
        order_type = %request.order_type(),
        base_url = client.base_url(),
        "placing order"
    );

    match place_order(&client, request, &mut log).await {
        Ok(result) => {
            info!(
                order_id = %result.order_id_display(),
                status = %result.status,
                "order accepted"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(error = %err, code = ?err.provider_code(), "order rejected");
            Err(err)
        }
    }
}
