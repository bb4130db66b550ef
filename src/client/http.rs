//! HTTP transport seam.
//!
//! The client only needs "send GET/POST with headers and parameters, return
//! status, content type and body". [`HttpTransport`] captures that so callers
//! can plug in their own stack; the default adapter is backed by `reqwest`.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type TransportResult = Result<HttpResponse, Box<dyn StdError + Send + Sync>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters go to the query string.
    Get,
    /// Parameters go to an URL-encoded form body.
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw `Content-Type` header, if the response had one.
    pub content_type: Option<String>,
    pub body: String,
}

/// Performs exactly one HTTP round-trip per call.
///
/// Errors returned here are network-level failures (DNS, TLS, timeouts);
/// HTTP error statuses are a normal [`HttpResponse`].
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, TransportResult>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url).query(&request.params),
                HttpMethod::Post => self.client.post(&request.url).form(&request.params),
            };
            let builder = request
                .headers
                .iter()
                .fold(builder, |builder, (name, value)| {
                    builder.header(name.as_str(), value.as_str())
                });

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        })
    }
}
