/*
[INPUT]:  Binance futures wire values and serde requirements
[OUTPUT]: Typed Rust enums with serialization and parsing support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new order kinds are supported
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::FuturesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }

    /// Whether orders of this type carry a price and time in force
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancelled
    #[default]
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
    /// Good till crossing (post only)
    Gtx,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtx => "GTX",
        }
    }
}

macro_rules! impl_wire_enum {
    ($ty:ty, $label:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FuturesError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_uppercase();
                [$($variant),+]
                    .into_iter()
                    .find(|candidate| candidate.as_str() == normalized)
                    .ok_or_else(|| {
                        let allowed = [$($variant.as_str()),+].join("' or '");
                        FuturesError::validation(format!("{} must be either '{}'.", $label, allowed))
                    })
            }
        }
    };
}

impl_wire_enum!(Side, "Side", [Side::Buy, Side::Sell]);
impl_wire_enum!(OrderType, "Order type", [OrderType::Market, OrderType::Limit]);
impl_wire_enum!(
    TimeInForce,
    "Time in force",
    [TimeInForce::Gtc, TimeInForce::Ioc, TimeInForce::Fok, TimeInForce::Gtx]
);
