use std::collections::BTreeMap;

use crate::domain::value::SessionId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub balance_in_pence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prices {
    /// Price per SMS keyed by ISO country code (`GB`, `US`, ...).
    pub prices_in_pence: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmsResult {
    pub tx_guid: String,
    /// Number of recipients the message was accepted for.
    pub numbers: u32,
    pub sms_parts: u32,
    pub encoding: String,
    pub cost_in_pence: f64,
    pub new_balance_in_pence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorLookupResult {
    pub mcc: String,
    pub mnc: String,
    pub operator: String,
    pub cost_in_pence: f64,
    pub new_balance_in_pence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSession {
    pub session: SessionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStatus {
    /// The number that completed verification.
    pub msisdn: String,
}
