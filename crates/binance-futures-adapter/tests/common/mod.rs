/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use std::time::Duration;

use binance_futures_adapter::{ApiCredentials, ClientConfig, FuturesClient, OrderLog, OrderType};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> ApiCredentials {
    ApiCredentials::new(TEST_API_KEY, TEST_API_SECRET).expect("test credentials")
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> FuturesClient {
    client_with_timeout(server, Duration::from_secs(10))
}

#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> FuturesClient {
    let config = ClientConfig {
        base_url: server.uri(),
        timeout,
        ..ClientConfig::default()
    };
    FuturesClient::with_config(test_credentials(), config).expect("client init")
}

/// Order log that keeps records in memory
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingLog {
    pub records: Vec<(OrderType, String)>,
}

impl OrderLog for RecordingLog {
    fn write(&mut self, order_type: OrderType, record: &str) -> std::io::Result<()> {
        self.records.push((order_type, record.to_string()));
        Ok(())
    }
}
