use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// ZenSend API key sent with every request.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by ZenSend (`X-API-KEY`).
    pub const HEADER: &'static str = "X-API-KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::HEADER });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Mobile phone number in international format (`NUMBER`).
///
/// The value is sent exactly as given; ZenSend reports malformed numbers itself.
/// Use [`Msisdn::parse`] to normalize through libphonenumber metadata first.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by ZenSend for a single number (`NUMBER`).
    pub const FIELD: &'static str = "NUMBER";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse and normalize a phone number into the international digits ZenSend expects
    /// (E.164 without the leading `+`).
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();

        let parsed = phonenumber::parse(default_region, input.trim())
            .map_err(|_| ValidationError::InvalidPhoneNumber {
                input: input.clone(),
            })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Value as sent to ZenSend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender identity shown to recipients (`ORIGINATOR`).
///
/// Sent as given; an empty value is left for ZenSend to reject.
pub struct Originator(String);

impl Originator {
    /// Form field name used by ZenSend (`ORIGINATOR`).
    pub const FIELD: &'static str = "ORIGINATOR";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`BODY`).
///
/// Sent as given, whitespace included. An empty body comes back from ZenSend as
/// an `IS_EMPTY` failure on `BODY`.
pub struct MessageBody(String);

impl MessageBody {
    /// Form field name used by ZenSend (`BODY`).
    pub const FIELD: &'static str = "BODY";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom text for a verification SMS (`MESSAGE`).
///
/// Invariant: non-empty, since an unset message is omitted rather than sent blank.
pub struct VerificationMessage(String);

impl VerificationMessage {
    /// Form field name used by ZenSend (`MESSAGE`).
    pub const FIELD: &'static str = "MESSAGE";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque verification session id (`SESSION`) returned by `msisdn_verify`.
///
/// Kept byte-for-byte as issued.
pub struct SessionId(String);

impl SessionId {
    /// Query parameter name used by ZenSend (`SESSION`).
    pub const FIELD: &'static str = "SESSION";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the session id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How long delivery is attempted, in minutes (`TIMETOLIVE`).
///
/// Invariant: at least one minute.
pub struct TimeToLive(u32);

impl TimeToLive {
    /// Form field name used by ZenSend (`TIMETOLIVE`).
    pub const FIELD: &'static str = "TIMETOLIVE";

    /// Minimum allowed value.
    pub const MIN: u32 = 1;

    /// Create a validated time to live.
    pub fn minutes(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::TimeToLiveOutOfRange {
                min: Self::MIN,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying value in minutes.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of originator (`ORIGINATOR_TYPE`).
pub enum OriginatorType {
    /// Alphanumeric sender id.
    Alpha,
    /// Numeric sender id (a phone number).
    Msisdn,
}

impl OriginatorType {
    /// Form field name used by ZenSend (`ORIGINATOR_TYPE`).
    pub const FIELD: &'static str = "ORIGINATOR_TYPE";

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Msisdn => "msisdn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Character encoding requested for the message (`ENCODING`).
pub enum SmsEncoding {
    /// GSM 03.38 7-bit alphabet.
    Gsm,
    /// UCS-2 (16-bit) for characters outside the GSM alphabet.
    Ucs2,
}

impl SmsEncoding {
    /// Form field name used by ZenSend (`ENCODING`).
    pub const FIELD: &'static str = "ENCODING";

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gsm => "gsm",
            Self::Ucs2 => "ucs2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_trims_and_rejects_empty() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());
    }

    #[test]
    fn wire_values_are_kept_verbatim() {
        assert_eq!(Originator::new(" ORIG ").as_str(), " ORIG ");
        assert_eq!(Originator::new("").as_str(), "");
        assert_eq!(MessageBody::new(" hi ").as_str(), " hi ");
        assert_eq!(MessageBody::new("").as_str(), "");
        assert_eq!(Msisdn::new(" 447796354848 ").as_str(), " 447796354848 ");
        assert_eq!(SessionId::new(" SESS ").as_str(), " SESS ");
    }

    #[test]
    fn verification_message_rejects_only_empty() {
        let message = VerificationMessage::new(" code ").unwrap();
        assert_eq!(message.as_str(), " code ");
        assert!(matches!(
            VerificationMessage::new(""),
            Err(ValidationError::Empty {
                field: VerificationMessage::FIELD
            })
        ));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }

    #[test]
    fn msisdn_parse_strips_plus_and_formatting() {
        let number = Msisdn::parse(None, "+44 7796 354848").unwrap();
        assert_eq!(number.as_str(), "447796354848");

        let err = Msisdn::parse(None, "not-a-number").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));
    }

    #[test]
    fn time_to_live_enforces_minimum() {
        assert!(TimeToLive::minutes(0).is_err());
        assert_eq!(TimeToLive::minutes(60).unwrap().value(), 60);
    }

    #[test]
    fn enum_wire_values() {
        assert_eq!(OriginatorType::Alpha.as_str(), "alpha");
        assert_eq!(OriginatorType::Msisdn.as_str(), "msisdn");
        assert_eq!(SmsEncoding::Gsm.as_str(), "gsm");
        assert_eq!(SmsEncoding::Ucs2.as_str(), "ucs2");
    }
}
