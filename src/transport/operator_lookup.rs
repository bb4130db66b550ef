use serde::Deserialize;
use serde_json::Value;

use super::DecodeError;
use crate::domain::{Msisdn, OperatorLookupResult};

#[derive(Debug, Clone, Deserialize)]
struct OperatorLookupJson {
    mcc: String,
    mnc: String,
    operator: String,
    cost_in_pence: f64,
    new_balance_in_pence: f64,
}

pub fn encode_operator_lookup_query(number: &Msisdn) -> Vec<(String, String)> {
    vec![(Msisdn::FIELD.to_owned(), number.as_str().to_owned())]
}

pub fn decode_operator_lookup(payload: Value) -> Result<OperatorLookupResult, DecodeError> {
    let parsed: OperatorLookupJson = serde_json::from_value(payload)?;
    Ok(OperatorLookupResult {
        mcc: parsed.mcc,
        mnc: parsed.mnc,
        operator: parsed.operator,
        cost_in_pence: parsed.cost_in_pence,
        new_balance_in_pence: parsed.new_balance_in_pence,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_uses_number_param() {
        let number = Msisdn::new("441234567890");
        assert_eq!(
            encode_operator_lookup_query(&number),
            vec![("NUMBER".to_owned(), "441234567890".to_owned())]
        );
    }

    #[test]
    fn decode_maps_all_fields() {
        let payload = json!({
            "mcc": "123",
            "mnc": "456",
            "operator": "o2-uk",
            "cost_in_pence": 2.5,
            "new_balance_in_pence": 100.0
        });

        let result = decode_operator_lookup(payload).unwrap();
        assert_eq!(result.mcc, "123");
        assert_eq!(result.mnc, "456");
        assert_eq!(result.operator, "o2-uk");
        assert_eq!(result.cost_in_pence, 2.5);
        assert_eq!(result.new_balance_in_pence, 100.0);
    }

    #[test]
    fn decode_rejects_missing_operator() {
        let payload = json!({
            "mcc": "123",
            "mnc": "456",
            "cost_in_pence": 2.5,
            "new_balance_in_pence": 100.0
        });
        assert!(decode_operator_lookup(payload).is_err());
    }
}
