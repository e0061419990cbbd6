/*
[INPUT]:  Process arguments
[OUTPUT]: Parsed order flags and runtime overrides
[POS]:    CLI layer - argument definitions
[UPDATE]: When changing CLI flags
*/

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "binance-futures-cli",
    version,
    about = "Simple Binance Futures Testnet trading bot CLI."
)]
pub struct Cli {
    /// Trading pair symbol, e.g. BTCUSDT.
    #[arg(long)]
    pub symbol: String,

    /// Order side: BUY or SELL.
    #[arg(long)]
    pub side: String,

    /// Order type: MARKET or LIMIT.
    #[arg(long = "order-type", value_parser = ["MARKET", "LIMIT", "market", "limit"])]
    pub order_type: String,

    /// Order quantity as a positive number.
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Decimal,

    /// Price for LIMIT orders (must be omitted for MARKET).
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<Decimal>,

    /// Optional YAML settings file
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the order log directory
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_order() {
        let cli = Cli::try_parse_from([
            "binance-futures-cli",
            "--symbol",
            "btcusdt",
            "--side",
            "buy",
            "--order-type",
            "limit",
            "--quantity",
            "0.5",
            "--price",
            "30000.1",
        ])
        .unwrap();

        assert_eq!(cli.symbol, "btcusdt");
        assert_eq!(cli.order_type, "limit");
        assert_eq!(cli.quantity.to_string(), "0.5");
        assert_eq!(cli.price.map(|p| p.to_string()).as_deref(), Some("30000.1"));
        assert_eq!(cli.log_level, "info");
        assert!(cli.config_path.is_none());
    }

    #[test]
    fn test_rejects_unknown_order_type() {
        let result = Cli::try_parse_from([
            "binance-futures-cli",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--order-type",
            "STOP",
            "--quantity",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = Cli::try_parse_from([
            "binance-futures-cli",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--order-type",
            "MARKET",
            "--quantity",
            "-1",
        ])
        .unwrap();
        assert!(cli.quantity.is_sign_negative());
    }
}
