//! Domain layer: strong types with validation and invariants (no I/O).

mod failure;
mod request;
mod response;
mod validation;
mod value;

pub use failure::ServiceError;
pub use request::{CreateMsisdnVerification, NUMBERS_FIELD, SendOptions, SendSms};
pub use response::{
    Balance, OperatorLookupResult, Prices, SmsResult, VerificationSession, VerificationStatus,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, MessageBody, Msisdn, Originator, OriginatorType, SessionId, SmsEncoding, TimeToLive,
    VerificationMessage,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> MessageBody {
        MessageBody::new("BODY")
    }

    fn originator() -> Originator {
        Originator::new("ORIG")
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::HEADER
            })
        ));
    }

    #[test]
    fn send_sms_leaves_empty_values_to_the_service() {
        let request = SendSms::new(
            MessageBody::new(""),
            Originator::new(""),
            Vec::new(),
            SendOptions::default(),
        )
        .unwrap();
        assert_eq!(request.body().as_str(), "");
        assert_eq!(request.originator().as_str(), "");
        assert!(request.numbers().is_empty());
    }

    #[test]
    fn send_sms_rejects_comma_in_any_number() {
        let numbers = vec![
            Msisdn::new("447796354848"),
            Msisdn::new("44779635,4848"),
        ];
        let err = SendSms::new(body(), originator(), numbers, SendOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::CommaInNumber {
                number: "44779635,4848".to_owned()
            }
        );
    }

    #[test]
    fn create_verification_setters_are_optional() {
        let number = Msisdn::new("44123456790");
        let request = CreateMsisdnVerification::new(number.clone());
        assert_eq!(request.number(), &number);
        assert!(request.message_text().is_none());
        assert!(request.originator_id().is_none());

        let request = request
            .message(VerificationMessage::new("message").unwrap())
            .originator(Originator::new("orig"));
        assert_eq!(request.message_text().unwrap().as_str(), "message");
        assert_eq!(request.originator_id().unwrap().as_str(), "orig");
    }
}
