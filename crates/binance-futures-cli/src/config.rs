/*
[INPUT]:  Optional YAML settings file and CLI overrides
[OUTPUT]: Resolved runtime settings and adapter ClientConfig
[POS]:    Configuration layer - endpoint, timeout and log directory
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use binance_futures_adapter::http::DEFAULT_BASE_URL;
use binance_futures_adapter::http::signature::DEFAULT_RECV_WINDOW_MS;
use binance_futures_adapter::{ClientConfig, FuturesError, ParamOrder, Result};
use serde::{Deserialize, Serialize};

pub const LOG_DIR_NAME: &str = "logs";

/// Runtime settings for one CLI invocation
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    /// REST base URL, defaults to the futures testnet
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// recvWindow injected into signed requests
    pub recv_window_ms: u64,
    /// Parameter order for signed bodies: "insertion" or "sorted"
    pub param_order: ParamOrder,
    /// Directory holding the per-order-type log files
    pub log_dir: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            param_order: ParamOrder::default(),
            log_dir: PathBuf::from(LOG_DIR_NAME),
        }
    }
}

impl BotConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            FuturesError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|err| {
            FuturesError::Config(format!("failed to parse {}: {err}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// File settings when a path is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, base_url: Option<String>, log_dir: Option<PathBuf>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(log_dir) = log_dir {
            self.log_dir = log_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(FuturesError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(FuturesError::Config("base_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            recv_window_ms: self.recv_window_ms,
            param_order: self.param_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.base_url, "https://testnet.binancefuture.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.recv_window_ms, 5000);
        assert_eq!(config.log_dir, PathBuf::from("logs"));

        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(10));
        assert_eq!(client.param_order, ParamOrder::Insertion);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 3\nparam_order: sorted").unwrap();

        let config = BotConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.param_order, ParamOrder::Sorted);
        assert_eq!(config.recv_window_ms, 5000);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 0").unwrap();

        let err = BotConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FuturesError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = BotConfig::load(Some(Path::new("/nonexistent/bot.yaml"))).unwrap_err();
        assert!(matches!(err, FuturesError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::default()
            .with_overrides(Some("http://127.0.0.1:9000".into()), Some("/tmp/orders".into()));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/orders"));
    }
}
