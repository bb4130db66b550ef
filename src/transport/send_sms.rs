use serde::Deserialize;
use serde_json::Value;

use super::DecodeError;
use crate::domain::{
    MessageBody, Msisdn, NUMBERS_FIELD, Originator, OriginatorType, SendOptions, SendSms,
    SmsEncoding, SmsResult, TimeToLive,
};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJson {
    txguid: String,
    numbers: u32,
    smsparts: u32,
    encoding: String,
    cost_in_pence: f64,
    new_balance_in_pence: f64,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let numbers = request
        .numbers()
        .iter()
        .map(Msisdn::as_str)
        .collect::<Vec<_>>()
        .join(",");

    let mut params = vec![
        (
            MessageBody::FIELD.to_owned(),
            request.body().as_str().to_owned(),
        ),
        (
            Originator::FIELD.to_owned(),
            request.originator().as_str().to_owned(),
        ),
        (NUMBERS_FIELD.to_owned(), numbers),
    ];
    push_options(&mut params, request.options());
    params
}

fn push_options(params: &mut Vec<(String, String)>, options: &SendOptions) {
    if let Some(ttl) = options.time_to_live {
        params.push((TimeToLive::FIELD.to_owned(), ttl.value().to_string()));
    }
    if let Some(originator_type) = options.originator_type {
        params.push((
            OriginatorType::FIELD.to_owned(),
            originator_type.as_str().to_owned(),
        ));
    }
    if let Some(encoding) = options.encoding {
        params.push((SmsEncoding::FIELD.to_owned(), encoding.as_str().to_owned()));
    }
}

pub fn decode_send_sms(payload: Value) -> Result<SmsResult, DecodeError> {
    let parsed: SendSmsJson = serde_json::from_value(payload)?;
    Ok(SmsResult {
        tx_guid: parsed.txguid,
        numbers: parsed.numbers,
        sms_parts: parsed.smsparts,
        encoding: parsed.encoding,
        cost_in_pence: parsed.cost_in_pence,
        new_balance_in_pence: parsed.new_balance_in_pence,
    })
}
