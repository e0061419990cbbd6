/*
[INPUT]:  CLI arguments, environment credentials, optional YAML settings
[OUTPUT]: One placed order, printed summary, exit code 0/1
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit codes
*/

use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use binance_futures_adapter::ApiCredentials;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use binance_futures_cli::{BotConfig, Cli, report, submit_order, validation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("Unexpected error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "order submission failed");
            eprintln!("{}", report::failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let request = validation::validate_order_args(
        &args.symbol,
        &args.side,
        &args.order_type,
        args.quantity,
        args.price,
    )?;
    print!("{}", report::request_summary(&request));

    let config = BotConfig::load(args.config_path.as_deref())?
        .with_overrides(args.base_url, args.log_dir);
    debug!(?config, "configuration resolved");

    let credentials = ApiCredentials::from_env()?;
    let result = submit_order(&config, credentials, &request).await?;
    print!("{}", report::order_summary(&result));
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
