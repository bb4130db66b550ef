use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// Failure reported by ZenSend, or a response that could not be interpreted.
///
/// `http_code` is always the observed status. The remaining fields are only
/// filled to the extent the `failure` envelope supplied them; all of them are
/// `None` when the body was not JSON or carried neither `success` nor `failure`.
pub struct ServiceError {
    pub http_code: u16,
    pub failcode: Option<String>,
    /// Offending request parameter for validation failures (`IS_EMPTY` on `BODY`, ...).
    pub parameter: Option<String>,
    /// Set when the service still charged for the failed attempt.
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
}

impl ServiceError {
    /// Error for a response whose body could not be interpreted at all.
    pub fn unparseable(http_code: u16) -> Self {
        Self {
            http_code,
            failcode: None,
            parameter: None,
            cost_in_pence: None,
            new_balance_in_pence: None,
        }
    }

    /// Returns `true` if the service rejected a specific request parameter.
    pub fn is_parameter_error(&self) -> bool {
        self.parameter.is_some()
    }

    /// Returns `true` if the failed attempt was still billed.
    pub fn was_charged(&self) -> bool {
        self.cost_in_pence.is_some()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "http_code: {} failcode: {} parameter: {}",
            self.http_code,
            self.failcode.as_deref().unwrap_or("None"),
            self.parameter.as_deref().unwrap_or("None"),
        )
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::ServiceError;

    #[test]
    fn display_includes_code_failcode_and_parameter() {
        let err = ServiceError {
            http_code: 400,
            failcode: Some("IS_EMPTY".to_owned()),
            parameter: Some("BODY".to_owned()),
            cost_in_pence: None,
            new_balance_in_pence: None,
        };
        assert_eq!(
            err.to_string(),
            "http_code: 400 failcode: IS_EMPTY parameter: BODY"
        );
        assert!(err.is_parameter_error());
        assert!(!err.was_charged());
    }

    #[test]
    fn unparseable_has_only_http_code() {
        let err = ServiceError::unparseable(503);
        assert_eq!(err.http_code, 503);
        assert_eq!(err.failcode, None);
        assert_eq!(err.to_string(), "http_code: 503 failcode: None parameter: None");
    }
}
