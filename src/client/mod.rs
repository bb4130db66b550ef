//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod http;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

pub use http::{BoxFuture, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportResult};
use http::ReqwestTransport;

use crate::domain::{
    ApiKey, Balance, CreateMsisdnVerification, Msisdn, OperatorLookupResult, Prices, SendSms,
    ServiceError, SessionId, SmsResult, ValidationError, VerificationSession, VerificationStatus,
};
use crate::transport::DecodeError;

const DEFAULT_ENDPOINT: &str = "https://api.zensend.io";
const DEFAULT_VERIFY_ENDPOINT: &str = "https://verify.zensend.io";

const CHECK_BALANCE_PATH: &str = "/v3/checkbalance";
const OPERATOR_LOOKUP_PATH: &str = "/v3/operator_lookup";
const PRICES_PATH: &str = "/v3/prices";
const SEND_SMS_PATH: &str = "/v3/sendsms";
const MSISDN_VERIFY_PATH: &str = "/api/msisdn_verify";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ZenSendClient`].
///
/// Callers can tell apart:
/// - local validation failures (nothing was sent),
/// - network failures from the transport,
/// - failures reported by ZenSend (or responses it could not interpret),
/// - success payloads that do not match the documented shape.
pub enum ZenSendError {
    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// ZenSend answered with a `failure` envelope or an uninterpretable body.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// A `success` payload was missing a required field.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),
}

impl ZenSendError {
    /// The service failure, if this error is one.
    pub fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`ZenSendClient`].
///
/// Use this when you need to customize the endpoints, timeout, user-agent, or
/// the HTTP transport itself.
pub struct ZenSendClientBuilder {
    api_key: ApiKey,
    endpoint: String,
    verify_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ZenSendClientBuilder {
    /// Create a builder with the production endpoints and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            verify_endpoint: DEFAULT_VERIFY_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the messaging base URL (`https://api.zensend.io`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the verification base URL (`https://verify.zensend.io`).
    pub fn verify_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.verify_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom [`transport`](Self::transport) is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom [`transport`](Self::transport) is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through a custom [`HttpTransport`] instead of `reqwest`.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build a [`ZenSendClient`].
    pub fn build(self) -> Result<ZenSendClient, ZenSendError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| ZenSendError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(ZenSendClient {
            api_key: self.api_key,
            endpoint: trim_base(self.endpoint),
            verify_endpoint: trim_base(self.verify_endpoint),
            http,
        })
    }
}

#[derive(Clone)]
/// High-level ZenSend client.
///
/// Every operation is a single authenticated request whose response goes
/// through the same envelope handling. By default it uses:
/// - `https://api.zensend.io` for messaging, balance, prices and operator lookup
/// - `https://verify.zensend.io` for phone-number verification
pub struct ZenSendClient {
    api_key: ApiKey,
    endpoint: String,
    verify_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl ZenSendClient {
    /// Create a client using the production endpoints.
    ///
    /// For more customization, use [`ZenSendClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            verify_endpoint: DEFAULT_VERIFY_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> ZenSendClientBuilder {
        ZenSendClientBuilder::new(api_key)
    }

    /// Current account balance in pence.
    pub async fn check_balance(&self) -> Result<Balance, ZenSendError> {
        self.call(
            HttpMethod::Get,
            format!("{}{CHECK_BALANCE_PATH}", self.endpoint),
            crate::transport::encode_check_balance_query(),
            crate::transport::decode_balance,
        )
        .await
    }

    /// Look up the mobile operator currently serving `number`. This lookup is billed.
    pub async fn lookup_operator(
        &self,
        number: &Msisdn,
    ) -> Result<OperatorLookupResult, ZenSendError> {
        self.call(
            HttpMethod::Get,
            format!("{}{OPERATOR_LOOKUP_PATH}", self.endpoint),
            crate::transport::encode_operator_lookup_query(number),
            crate::transport::decode_operator_lookup,
        )
        .await
    }

    /// Per-country SMS prices in pence.
    pub async fn get_prices(&self) -> Result<Prices, ZenSendError> {
        self.call(
            HttpMethod::Get,
            format!("{}{PRICES_PATH}", self.endpoint),
            crate::transport::encode_get_prices_query(),
            crate::transport::decode_prices,
        )
        .await
    }

    /// Send an SMS to one or more recipients.
    ///
    /// Errors:
    /// - [`ZenSendError::Service`] when ZenSend rejects the message (for example
    ///   `IS_EMPTY` on `BODY`) or answers with something other than an envelope,
    /// - [`ZenSendError::Transport`] when the request could not be performed.
    ///
    /// Recipient validation happens earlier, in [`SendSms::new`].
    pub async fn send_sms(&self, request: SendSms) -> Result<SmsResult, ZenSendError> {
        self.call(
            HttpMethod::Post,
            format!("{}{SEND_SMS_PATH}", self.endpoint),
            crate::transport::encode_send_sms_form(&request),
            crate::transport::decode_send_sms,
        )
        .await
    }

    /// Start verifying a phone number; returns the session to poll.
    pub async fn create_msisdn_verification(
        &self,
        request: CreateMsisdnVerification,
    ) -> Result<VerificationSession, ZenSendError> {
        self.call(
            HttpMethod::Post,
            format!("{}{MSISDN_VERIFY_PATH}", self.verify_endpoint),
            crate::transport::encode_create_verification_form(&request),
            crate::transport::decode_verification_session,
        )
        .await
    }

    /// Poll a verification session; succeeds once the number has been verified.
    pub async fn msisdn_verification_status(
        &self,
        session: &SessionId,
    ) -> Result<VerificationStatus, ZenSendError> {
        self.call(
            HttpMethod::Get,
            format!("{}{MSISDN_VERIFY_PATH}", self.verify_endpoint),
            crate::transport::encode_verification_status_query(session),
            crate::transport::decode_verification_status,
        )
        .await
    }

    async fn call<T>(
        &self,
        method: HttpMethod,
        url: String,
        params: Vec<(String, String)>,
        decode: fn(Value) -> Result<T, DecodeError>,
    ) -> Result<T, ZenSendError> {
        tracing::debug!(?method, %url, "sending ZenSend request");

        let request = HttpRequest {
            method,
            url,
            headers: vec![(ApiKey::HEADER.to_owned(), self.api_key.as_str().to_owned())],
            params,
        };

        let response = self
            .http
            .send(request)
            .await
            .map_err(ZenSendError::Transport)?;

        let payload = crate::transport::interpret_envelope(
            response.status,
            response.content_type.as_deref(),
            &response.body,
        )
        .inspect_err(|err| {
            tracing::debug!(
                status = response.status,
                failcode = ?err.failcode,
                parameter = ?err.parameter,
                cost_in_pence = ?err.cost_in_pence,
                "ZenSend request failed"
            );
        })?;

        let value = decode(payload).map_err(|err| {
            tracing::debug!(
                status = response.status,
                error = %err,
                "ZenSend response not decodable"
            );
            ZenSendError::Decode(Box::new(err))
        })?;
        tracing::debug!(status = response.status, "ZenSend request succeeded");
        Ok(value)
    }
}

fn trim_base(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_owned()
}
