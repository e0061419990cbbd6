/*
[INPUT]:  Mock exchange responses and temporary log directories
[OUTPUT]: Verification of the submit flow and on-disk order records
[POS]:    Integration test layer - library submission path
[UPDATE]: When the submission sequence or log layout changes
*/

use std::str::FromStr;

use binance_futures_adapter::{ApiCredentials, FuturesError, OrderRequest, Side};
use binance_futures_cli::{BotConfig, submit_order};
use rust_decimal::Decimal;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("decimal")
}

fn config_for(server: &MockServer, log_dir: &std::path::Path) -> BotConfig {
    BotConfig::default().with_overrides(Some(server.uri()), Some(log_dir.to_path_buf()))
}

#[tokio::test]
async fn test_limit_order_written_to_limit_log() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": 42,
            "status": "NEW",
            "executedQty": "0",
            "avgPrice": "0.00",
        })))
        .mount(&server)
        .await;

    let log_dir = tempfile::tempdir().expect("tempdir");
    let config = config_for(&server, log_dir.path());
    let credentials = assert_ok!(ApiCredentials::new("key", "secret"));
    let request = assert_ok!(OrderRequest::limit("BTCUSDT", Side::Buy, dec("0.5"), dec("20000")));

    let result = assert_ok!(submit_order(&config, credentials, &request).await);
    assert_eq!(result.order_id, Some(json!(42)));
    assert_eq!(result.avg_price.as_deref(), Some("0.00"));

    let limit_log = std::fs::read_to_string(log_dir.path().join("limit_order.log"))
        .expect("limit log written");
    let lines: Vec<&str> = limit_log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" - INFO - Placing order with payload: "));
    assert!(lines[0].contains(r#""price":"20000""#));
    assert!(lines[1].contains(" - INFO - Order response: "));
}

#[tokio::test]
async fn test_invalid_config_rejected_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let log_dir = tempfile::tempdir().expect("tempdir");
    let mut config = config_for(&server, log_dir.path());
    config.timeout_secs = 0;
    let credentials = assert_ok!(ApiCredentials::new("key", "secret"));
    let request = assert_ok!(OrderRequest::market("BTCUSDT", Side::Buy, dec("1")));

    let err = submit_order(&config, credentials, &request).await.unwrap_err();
    assert!(matches!(err, FuturesError::Config(_)));
}
