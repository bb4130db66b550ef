use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::DecodeError;
use crate::domain::{Balance, Prices};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJson {
    balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct PricesJson {
    prices_in_pence: BTreeMap<String, f64>,
}

pub fn encode_check_balance_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn encode_get_prices_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn decode_balance(payload: Value) -> Result<Balance, DecodeError> {
    let parsed: BalanceJson = serde_json::from_value(payload)?;
    Ok(Balance {
        balance_in_pence: parsed.balance,
    })
}

pub fn decode_prices(payload: Value) -> Result<Prices, DecodeError> {
    let parsed: PricesJson = serde_json::from_value(payload)?;
    Ok(Prices {
        prices_in_pence: parsed.prices_in_pence,
    })
}
