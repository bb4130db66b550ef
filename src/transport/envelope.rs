//! `{"success": ...}` / `{"failure": ...}` response envelope.

use serde_json::Value;

use crate::domain::ServiceError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Text of a failure field; non-string values keep their JSON rendering and
/// `null` counts as absent.
fn text_field(failure: &Value, key: &str) -> Option<String> {
    match failure.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Unwrap the envelope of a ZenSend response into its `success` payload.
///
/// Success is decided by the envelope alone; the status code only ends up in
/// the error. Non-JSON content types are never parsed, and JSON that is
/// malformed or has neither key yields [`ServiceError::unparseable`].
pub fn interpret_envelope(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<Value, ServiceError> {
    let is_json = content_type
        .is_some_and(|value| value.to_ascii_lowercase().contains(JSON_CONTENT_TYPE));
    if !is_json {
        return Err(ServiceError::unparseable(status));
    }

    let mut json: Value =
        serde_json::from_str(body).map_err(|_| ServiceError::unparseable(status))?;

    if let Some(success) = json.get_mut("success") {
        return Ok(success.take());
    }

    if let Some(failure) = json.get("failure") {
        let Some(failcode) = text_field(failure, "failcode") else {
            return Err(ServiceError::unparseable(status));
        };
        return Err(ServiceError {
            http_code: status,
            failcode: Some(failcode),
            parameter: text_field(failure, "parameter"),
            cost_in_pence: failure.get("cost_in_pence").and_then(Value::as_f64),
            new_balance_in_pence: failure.get("new_balance_in_pence").and_then(Value::as_f64),
        });
    }

    Err(ServiceError::unparseable(status))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const JSON: Option<&str> = Some("application/json");

    #[test]
    fn success_payload_is_returned() {
        let payload = interpret_envelope(200, JSON, r#"{"success":{"balance":100.2}}"#).unwrap();
        assert_eq!(payload, json!({"balance": 100.2}));
    }

    #[test]
    fn success_wins_over_error_status() {
        let payload = interpret_envelope(503, JSON, r#"{"success":{"msisdn":"44"}}"#).unwrap();
        assert_eq!(payload, json!({"msisdn": "44"}));
    }

    #[test]
    fn content_type_with_charset_is_json() {
        let payload = interpret_envelope(
            200,
            Some("application/json; charset=utf-8"),
            r#"{"success":{}}"#,
        )
        .unwrap();
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn non_json_content_type_is_never_parsed() {
        let err = interpret_envelope(503, Some("text/plain"), r#"{"success":{}}"#).unwrap_err();
        assert_eq!(err, ServiceError::unparseable(503));
    }

    #[test]
    fn missing_content_type_is_unparseable() {
        let err = interpret_envelope(200, None, r#"{"success":{}}"#).unwrap_err();
        assert_eq!(err, ServiceError::unparseable(200));
    }

    #[test]
    fn json_without_envelope_keys_is_unparseable() {
        let err = interpret_envelope(503, JSON, "{}").unwrap_err();
        assert_eq!(err, ServiceError::unparseable(503));

        let err = interpret_envelope(200, JSON, "[1, 2]").unwrap_err();
        assert_eq!(err, ServiceError::unparseable(200));
    }

    #[test]
    fn malformed_json_is_unparseable() {
        let err = interpret_envelope(502, JSON, "{ not json").unwrap_err();
        assert_eq!(err, ServiceError::unparseable(502));
    }

    #[test]
    fn failure_with_parameter() {
        let body = r#"{"failure":{"failcode":"IS_EMPTY","parameter":"BODY"}}"#;
        let err = interpret_envelope(400, JSON, body).unwrap_err();
        assert_eq!(err.http_code, 400);
        assert_eq!(err.failcode.as_deref(), Some("IS_EMPTY"));
        assert_eq!(err.parameter.as_deref(), Some("BODY"));
        assert_eq!(err.cost_in_pence, None);
    }

    #[test]
    fn failure_with_charge_details() {
        let body = r#"
        {
          "failure": {
            "failcode": "DATA_MISSING",
            "cost_in_pence": 2.5,
            "new_balance_in_pence": 100.0
          }
        }
        "#;
        let err = interpret_envelope(503, JSON, body).unwrap_err();
        assert_eq!(err.http_code, 503);
        assert_eq!(err.failcode.as_deref(), Some("DATA_MISSING"));
        assert_eq!(err.parameter, None);
        assert_eq!(err.cost_in_pence, Some(2.5));
        assert_eq!(err.new_balance_in_pence, Some(100.0));
    }

    #[test]
    fn failure_without_failcode_is_unparseable() {
        let err = interpret_envelope(400, JSON, r#"{"failure":{"parameter":"BODY"}}"#).unwrap_err();
        assert_eq!(err, ServiceError::unparseable(400));
    }

    #[test]
    fn failcode_survives_odd_optional_fields() {
        let body = r#"
        {
          "failure": {
            "failcode": "NOT_VALID",
            "parameter": 7,
            "cost_in_pence": "free",
            "new_balance_in_pence": null
          }
        }
        "#;
        let err = interpret_envelope(400, JSON, body).unwrap_err();
        assert_eq!(err.failcode.as_deref(), Some("NOT_VALID"));
        assert_eq!(err.parameter.as_deref(), Some("7"));
        assert_eq!(err.cost_in_pence, None);
        assert_eq!(err.new_balance_in_pence, None);
    }

    #[test]
    fn failure_that_is_not_an_object_is_unparseable() {
        let err = interpret_envelope(500, JSON, r#"{"failure":"boom"}"#).unwrap_err();
        assert_eq!(err, ServiceError::unparseable(500));
    }
}
