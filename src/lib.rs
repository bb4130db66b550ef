//! Typed Rust client for the ZenSend SMS and verification HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details (including the `success`/`failure` envelope), and a
//! small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use zensend::{ApiKey, MessageBody, Msisdn, Originator, SendOptions, SendSms, ZenSendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zensend::ZenSendError> {
//!     let client = ZenSendClient::new(ApiKey::new("...")?);
//!     let request = SendSms::new(
//!         MessageBody::new("hello"),
//!         Originator::new("ZenSend"),
//!         vec![Msisdn::new("447796354848")],
//!         SendOptions::default(),
//!     )?;
//!     let result = client.send_sms(request).await?;
//!     println!("sent {} part(s), txguid {}", result.sms_parts, result.tx_guid);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ZenSendClient, ZenSendClientBuilder,
    ZenSendError,
};
pub use domain::{
    ApiKey, Balance, CreateMsisdnVerification, MessageBody, Msisdn, OperatorLookupResult,
    Originator, OriginatorType, Prices, SendOptions, SendSms, ServiceError, SessionId,
    SmsEncoding, SmsResult, TimeToLive, ValidationError, VerificationMessage, VerificationSession,
    VerificationStatus,
};
