//! The adapter between generic requests and a concrete transport.
//!
//! # Design
//! `FetchHttpClientAdapter` holds only its transport and carries no mutable
//! state between calls. Every call resolves to exactly one `HttpResponse`:
//! replies from the server pass through verbatim whatever their status, and
//! local failures (transport errors, body encoding, JSON decoding) become a
//! synthesized 500 response carrying the failure message.

use std::future::Future;

use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{FetchOptions, Transport, TransportResponse};

/// Anything that can turn an `HttpRequest` into an `HttpResponse`.
///
/// Implementations never fail: every outcome is reported through the
/// returned response's status code and body.
pub trait HttpClient: Send + Sync {
    fn request(&self, request: &HttpRequest) -> impl Future<Output = HttpResponse> + Send;
}

/// `HttpClient` implemented on top of a `Transport`.
#[derive(Debug, Clone, Default)]
pub struct FetchHttpClientAdapter<T> {
    transport: T,
}

impl<T: Transport> FetchHttpClientAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Convert a transport response into an `HttpResponse`.
    ///
    /// The status code is copied as-is. A payload that is not valid JSON
    /// yields a synthesized 500 response.
    pub async fn adapt<R: TransportResponse>(&self, response: R) -> HttpResponse {
        let status_code = response.status();
        match response.json().await {
            Ok(body) => HttpResponse { status_code, body },
            Err(err) => {
                tracing::warn!(status_code, error = %err, "response body is not valid JSON");
                HttpResponse::transport_failure(err)
            }
        }
    }
}

impl<T: Transport> HttpClient for FetchHttpClientAdapter<T> {
    async fn request(&self, request: &HttpRequest) -> HttpResponse {
        let body = match request.body.as_ref().map(serde_json::to_string).transpose() {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(url = %request.url, error = %err, "failed to serialize request body");
                return HttpResponse::transport_failure(err);
            }
        };

        let options = FetchOptions {
            method: request.method,
            body,
            headers: request.headers.clone(),
        };

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        match self.transport.fetch(&request.url, options).await {
            Ok(response) => self.adapt(response).await,
            Err(err) => {
                tracing::warn!(method = %request.method, url = %request.url, error = %err, "transport failed");
                HttpResponse::transport_failure(err)
            }
        }
    }
}
