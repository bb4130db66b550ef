use serde::Deserialize;
use serde_json::Value;

use super::DecodeError;
use crate::domain::{
    CreateMsisdnVerification, Msisdn, Originator, SessionId, VerificationMessage,
    VerificationSession, VerificationStatus,
};

#[derive(Debug, Clone, Deserialize)]
struct SessionJson {
    session: String,
}

#[derive(Debug, Clone, Deserialize)]
struct StatusJson {
    msisdn: String,
}

pub fn encode_create_verification_form(
    request: &CreateMsisdnVerification,
) -> Vec<(String, String)> {
    let mut params = vec![(Msisdn::FIELD.to_owned(), request.number().as_str().to_owned())];
    if let Some(message) = request.message_text() {
        params.push((
            VerificationMessage::FIELD.to_owned(),
            message.as_str().to_owned(),
        ));
    }
    if let Some(originator) = request.originator_id().filter(|o| !o.as_str().is_empty()) {
        params.push((Originator::FIELD.to_owned(), originator.as_str().to_owned()));
    }
    params
}

pub fn encode_verification_status_query(session: &SessionId) -> Vec<(String, String)> {
    vec![(SessionId::FIELD.to_owned(), session.as_str().to_owned())]
}

pub fn decode_verification_session(payload: Value) -> Result<VerificationSession, DecodeError> {
    let parsed: SessionJson = serde_json::from_value(payload)?;
    if parsed.session.is_empty() {
        return Err(DecodeError::InvalidSession {
            value: parsed.session,
        });
    }
    Ok(VerificationSession {
        session: SessionId::new(parsed.session),
    })
}

pub fn decode_verification_status(payload: Value) -> Result<VerificationStatus, DecodeError> {
    let parsed: StatusJson = serde_json::from_value(payload)?;
    Ok(VerificationStatus {
        msisdn: parsed.msisdn,
    })
}
