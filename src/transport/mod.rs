//! Transport layer: wire-format details (parameter encoding, envelope and payload decoding).

mod account;
mod envelope;
mod operator_lookup;
mod send_sms;
mod verify;

pub use account::{
    decode_balance, decode_prices, encode_check_balance_query, encode_get_prices_query,
};
pub use envelope::interpret_envelope;
pub use operator_lookup::{decode_operator_lookup, encode_operator_lookup_query};
pub use send_sms::{decode_send_sms, encode_send_sms_form};
pub use verify::{
    decode_verification_session, decode_verification_status, encode_create_verification_form,
    encode_verification_status_query,
};

/// A `success` payload that does not match the documented shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected success payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("success payload contains an invalid session id: {value:?}")]
    InvalidSession { value: String },
}
