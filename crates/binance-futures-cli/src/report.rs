/*
[INPUT]:  Validated requests, order results and top-level errors
[OUTPUT]: Human-readable summaries and category-specific failure messages
[POS]:    Presentation layer - stdout/stderr text for the CLI
[UPDATE]: When output format or error categories change
*/

use std::fmt::Write as _;

use binance_futures_adapter::{ErrorKind, FuturesError, OrderRequest, OrderResult};

/// Block printed before the order is submitted
pub fn request_summary(request: &OrderRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nOrder request summary:");
    let _ = writeln!(out, "----------------------");
    let _ = writeln!(out, "Symbol     : {}", request.symbol());
    let _ = writeln!(out, "Side       : {}", request.side());
    let _ = writeln!(out, "Order Type : {}", request.order_type());
    let _ = writeln!(out, "Quantity   : {}", request.quantity());
    if let Some(price) = request.price() {
        let _ = writeln!(out, "Price      : {price}");
    }
    out.push('\n');
    out
}

/// Block printed after a successful placement
pub fn order_summary(result: &OrderResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order placed successfully.");
    let _ = writeln!(out, "-------------------------");
    let _ = writeln!(out, "orderId     : {}", result.order_id_display());
    let _ = writeln!(out, "status      : {}", result.status);
    let _ = writeln!(out, "executedQty : {}", result.executed_qty);
    let _ = writeln!(
        out,
        "avgPrice    : {}",
        result.avg_price.as_deref().unwrap_or("N/A")
    );
    out.push('\n');
    out
}

/// One-line stderr message for a failed run
pub fn failure_message(err: &anyhow::Error) -> String {
    let Some(futures_err) = err.downcast_ref::<FuturesError>() else {
        return format!("Unexpected error: {err:#}");
    };

    match futures_err.kind() {
        ErrorKind::Validation => format!("Input validation error: {futures_err}"),
        ErrorKind::Configuration => match futures_err {
            FuturesError::Config(message) => format!("Configuration error: {message}"),
            other => format!("Configuration error: {other}"),
        },
        ErrorKind::Api => futures_err.to_string(),
        ErrorKind::Timeout => "Network timeout while communicating with Binance API.".to_string(),
        ErrorKind::Transport => format!("Network error: {futures_err}"),
        ErrorKind::Unexpected => format!("Unexpected error: {futures_err}"),
    }
}
