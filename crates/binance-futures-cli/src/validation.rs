/*
[INPUT]:  Raw CLI values (symbol, side, order type, quantity, price)
[OUTPUT]: Normalized values and a validated OrderRequest
[POS]:    Validation layer - input checks before any network call
[UPDATE]: When validation rules or messages change
*/

use binance_futures_adapter::{FuturesError, OrderRequest, OrderType, Result, Side};
use rust_decimal::Decimal;

fn invalid(message: &str) -> FuturesError {
    FuturesError::Validation(message.to_string())
}

/// Trimmed, upper-cased, ASCII alphanumeric symbol
pub fn validate_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(invalid("Symbol must be a non-empty string, e.g. 'BTCUSDT'."));
    }
    let symbol = symbol.to_ascii_uppercase();
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("Symbol must be alphanumeric, e.g. 'BTCUSDT'."));
    }
    Ok(symbol)
}

pub fn validate_side(side: &str) -> Result<Side> {
    if side.trim().is_empty() {
        return Err(invalid("Side is required and must be 'BUY' or 'SELL'."));
    }
    side.parse()
}

pub fn validate_order_type(order_type: &str) -> Result<OrderType> {
    if order_type.trim().is_empty() {
        return Err(invalid(
            "Order type is required and must be 'MARKET' or 'LIMIT'.",
        ));
    }
    order_type.parse()
}

pub fn validate_quantity(quantity: Decimal) -> Result<Decimal> {
    if quantity <= Decimal::ZERO {
        return Err(invalid("Quantity must be greater than 0."));
    }
    Ok(quantity.normalize())
}

/// Price must be absent for MARKET and positive for LIMIT
pub fn validate_price_for_type(
    order_type: OrderType,
    price: Option<Decimal>,
) -> Result<Option<Decimal>> {
    match (order_type, price) {
        (OrderType::Market, None) => Ok(None),
        (OrderType::Market, Some(_)) => {
            Err(invalid("Price must not be provided for MARKET orders."))
        }
        (OrderType::Limit, None) => Err(invalid("Price is required for LIMIT orders.")),
        (OrderType::Limit, Some(price)) if price <= Decimal::ZERO => {
            Err(invalid("Price must be greater than 0 for LIMIT orders."))
        }
        (OrderType::Limit, Some(price)) => Ok(Some(price.normalize())),
    }
}

/// Validate all CLI values and build the order request
pub fn validate_order_args(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: Decimal,
    price: Option<Decimal>,
) -> Result<OrderRequest> {
    let symbol = validate_symbol(symbol)?;
    let side = validate_side(side)?;
    let order_type = validate_order_type(order_type)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price_for_type(order_type, price)?;

    OrderRequest::new(symbol, side, order_type, quantity, price)
}
