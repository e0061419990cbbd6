/*
[INPUT]:  Caller order intent and raw request parameters
[OUTPUT]: Validated order requests and ordered, form-encodable parameter sets
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new request fields are added
*/

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;

use super::enums::{OrderType, Side, TimeInForce};
use crate::http::{FuturesError, Result};

/// Ordered request parameters.
///
/// Keys keep their first insertion position; setting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, keeping the original position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Builder-style variant of [`RequestParams::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Sort parameters lexicographically by key
    pub fn sort_by_key(&mut self) {
        self.pairs.sort_by(|left, right| left.0.cmp(&right.0));
    }

    /// Encode as `application/x-www-form-urlencoded`, preserving order
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Serialize for RequestParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A validated order intent.
///
/// A price is present exactly when the order type is `LIMIT`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
    time_in_force: TimeInForce,
}

impl OrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(FuturesError::validation(
                "Symbol must be a non-empty string, e.g. 'BTCUSDT'.",
            ));
        }
        if quantity <= Decimal::ZERO {
            return Err(FuturesError::validation("Quantity must be greater than 0."));
        }
        match (order_type, price) {
            (OrderType::Market, Some(_)) => {
                return Err(FuturesError::validation(
                    "Price must not be provided for MARKET orders.",
                ));
            }
            (OrderType::Limit, None) => {
                return Err(FuturesError::validation("Price is required for LIMIT orders."));
            }
            (OrderType::Limit, Some(price)) if price <= Decimal::ZERO => {
                return Err(FuturesError::validation(
                    "Price must be greater than 0 for LIMIT orders.",
                ));
            }
            _ => {}
        }

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
            time_in_force: TimeInForce::default(),
        })
    }

    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Result<Self> {
        Self::new(symbol, side, OrderType::Market, quantity, None)
    }

    pub fn limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self> {
        Self::new(symbol, side, OrderType::Limit, quantity, Some(price))
    }

    /// Override the time in force sent with LIMIT orders
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    /// Parameters for `POST /fapi/v1/order`, before signing
    pub fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new()
            .with("symbol", &self.symbol)
            .with("side", self.side)
            .with("type", self.order_type)
            .with("quantity", self.quantity);

        if let (OrderType::Limit, Some(price)) = (self.order_type, self.price) {
            params.insert("price", price);
            params.insert("timeInForce", self.time_in_force);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_market_params_exclude_price() {
        let request = OrderRequest::market("BTCUSDT", Side::Buy, dec("0.01")).unwrap();
        let params = request.to_params();

        assert!(!params.contains("price"));
        assert!(!params.contains("timeInForce"));
        assert_eq!(
            params.to_query_string(),
            "symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01"
        );
    }

    #[test]
    fn test_limit_params_carry_price() {
        let request =
            OrderRequest::limit("ETHUSDT", Side::Sell, dec("1.5"), dec("2500.25")).unwrap();
        let params = request.to_params();

        assert_eq!(params.get("price"), Some("2500.25"));
        assert_eq!(params.get("timeInForce"), Some("GTC"));
        assert_eq!(
            params.to_query_string(),
            "symbol=ETHUSDT&side=SELL&type=LIMIT&quantity=1.5&price=2500.25&timeInForce=GTC"
        );
    }

    #[test]
    fn test_limit_time_in_force_override() {
        let request = OrderRequest::limit("ETHUSDT", Side::Buy, dec("1"), dec("10"))
            .unwrap()
            .with_time_in_force(TimeInForce::Ioc);
        assert_eq!(request.to_params().get("timeInForce"), Some("IOC"));
    }

    #[test]
    fn test_price_type_mismatch_rejected() {
        let market_with_price = OrderRequest::new(
            "BTCUSDT",
            Side::Buy,
            OrderType::Market,
            dec("1"),
            Some(dec("100")),
        );
        assert!(matches!(market_with_price, Err(FuturesError::Validation(_))));

        let limit_without_price =
            OrderRequest::new("BTCUSDT", Side::Buy, OrderType::Limit, dec("1"), None);
        assert!(matches!(limit_without_price, Err(FuturesError::Validation(_))));

        let negative_price = OrderRequest::limit("BTCUSDT", Side::Buy, dec("1"), dec("-5"));
        assert!(matches!(negative_price, Err(FuturesError::Validation(_))));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        for quantity in ["0", "-0.5"] {
            let result = OrderRequest::market("BTCUSDT", Side::Sell, dec(quantity));
            assert!(matches!(result, Err(FuturesError::Validation(_))));
        }
    }

    #[test]
    fn test_params_insert_keeps_position() {
        let mut params = RequestParams::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        assert_eq!(params.to_query_string(), "a=3&b=2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_params_percent_encoding() {
        let params = RequestParams::new().with("note", "a b&c=d");
        assert_eq!(params.to_query_string(), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_params_serialize_as_ordered_map() {
        let params = RequestParams::new().with("symbol", "BTCUSDT").with("side", "BUY");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"symbol":"BTCUSDT","side":"BUY"}"#
        );
    }
}
