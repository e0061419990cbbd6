/*
[INPUT]:  HTTP configuration (base URL, timeout, recv window) and credentials
[OUTPUT]: Configured reqwest client ready for signed and unsigned API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

use crate::auth::{ApiCredentials, HmacSigner};
use crate::http::response::classify;
use crate::http::signature::{DEFAULT_RECV_WINDOW_MS, ParamOrder, RequestSigner};
use crate::http::{FuturesError, Result};
use crate::types::{ApiOutcome, RequestParams};

/// Binance USDT-M futures testnet
pub const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

const API_KEY_HEADER_NAME: HeaderName = HeaderName::from_static("x-mbx-apikey");
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub recv_window_ms: u64,
    pub param_order: ParamOrder,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            param_order: ParamOrder::default(),
        }
    }
}

/// HTTP client for the Binance futures REST API.
///
/// Holds one connection pool with the API key header preset; calls are
/// expected to be issued sequentially.
#[derive(Debug)]
pub struct FuturesClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
    signer: RequestSigner,
}

impl FuturesClient {
    /// Create a new client with default configuration
    pub fn new(credentials: ApiCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: ApiCredentials, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let mut api_key = HeaderValue::from_str(credentials.api_key()).map_err(|_| {
            FuturesError::Config("API key contains characters not allowed in a header".into())
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER_NAME, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let signer = RequestSigner::new(HmacSigner::new(credentials.secret())?)
            .with_recv_window(config.recv_window_ms)
            .with_order(config.param_order);

        Ok(Self {
            http_client,
            base_url,
            timeout: config.timeout,
            signer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build full URL for an endpoint path such as `/fapi/v1/order`
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// POST form parameters to `path`.
    ///
    /// Signed requests transmit the signer's body string verbatim.
    pub async fn post(&self, path: &str, params: &RequestParams, signed: bool) -> Result<ApiOutcome> {
        let url = self.endpoint_url(path)?;
        let body = if signed {
            self.signer.sign(params)?.into_body()
        } else {
            params.to_query_string()
        };

        debug!(path, signed, param_count = params.len(), "sending POST");
        let response = self
            .http_client
            .post(url)
            .body(body)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        debug!(path, status = status.as_u16(), "received response");

        classify(status, &bytes)
    }

    fn transport_error(&self, err: reqwest::Error) -> FuturesError {
        FuturesError::from_transport(err, self.timeout.as_secs())
    }
}
