use crate::domain::validation::ValidationError;
use crate::domain::value::{
    MessageBody, Msisdn, Originator, OriginatorType, SmsEncoding, TimeToLive, VerificationMessage,
};

/// Form field holding the comma-joined recipient list of `sendsms`.
pub const NUMBERS_FIELD: &str = "NUMBERS";

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub time_to_live: Option<TimeToLive>,
    pub originator_type: Option<OriginatorType>,
    pub encoding: Option<SmsEncoding>,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    body: MessageBody,
    originator: Originator,
    numbers: Vec<Msisdn>,
    options: SendOptions,
}

impl SendSms {
    /// Build a send request.
    ///
    /// Recipients are sent as one comma-joined field, so a number containing `,`
    /// is rejected here, before anything reaches the network. Every other check
    /// (empty body, originator or recipient list) is left to ZenSend.
    pub fn new(
        body: MessageBody,
        originator: Originator,
        numbers: Vec<Msisdn>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if let Some(number) = numbers.iter().find(|number| number.as_str().contains(',')) {
            return Err(ValidationError::CommaInNumber {
                number: number.as_str().to_owned(),
            });
        }
        Ok(Self {
            body,
            originator,
            numbers,
            options,
        })
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn numbers(&self) -> &[Msisdn] {
        &self.numbers
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Start a phone-number verification session.
pub struct CreateMsisdnVerification {
    number: Msisdn,
    message: Option<VerificationMessage>,
    originator: Option<Originator>,
}

impl CreateMsisdnVerification {
    pub fn new(number: Msisdn) -> Self {
        Self {
            number,
            message: None,
            originator: None,
        }
    }

    /// Override the text of the verification SMS.
    pub fn message(mut self, message: VerificationMessage) -> Self {
        self.message = Some(message);
        self
    }

    /// Override the sender shown on the verification SMS.
    pub fn originator(mut self, originator: Originator) -> Self {
        self.originator = Some(originator);
        self
    }

    pub fn number(&self) -> &Msisdn {
        &self.number
    }

    pub fn message_text(&self) -> Option<&VerificationMessage> {
        self.message.as_ref()
    }

    pub fn originator_id(&self) -> Option<&Originator> {
        self.originator.as_ref()
    }
}
