//! The transport capability the adapter delegates to.
//!
//! # Design
//! A transport performs one HTTP round-trip and hands back a response that
//! can report its status and decode its payload as JSON. It knows nothing
//! about `HttpRequest`/`HttpResponse`; the adapter shapes inputs and outputs
//! around it. `ReqwestTransport` is the production implementation, tests
//! substitute their own.

use std::future::Future;

use serde_json::Value;

use crate::http::{Headers, HttpMethod};

/// Per-call options handed to `Transport::fetch`.
///
/// `body` is already-serialized JSON text. `None` fields mean "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Option<Headers>,
}

/// Performs a single HTTP request.
pub trait Transport: Send + Sync {
    type Response: TransportResponse;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a request to `url`. An `Err` means no response was obtained.
    fn fetch(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

/// A response obtained from a `Transport`.
pub trait TransportResponse: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    fn status(&self) -> u16;

    /// Consume the response and parse its payload as JSON.
    fn json(self) -> impl Future<Output = Result<Value, Self::Error>> + Send;
}
