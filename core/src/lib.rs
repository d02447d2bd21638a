//! Transport-agnostic HTTP client adapter.
//!
//! # Overview
//! Callers describe a request as plain data (`HttpRequest`), hand it to an
//! `HttpClient`, and always receive an `HttpResponse`. The concrete network
//! stack sits behind the `Transport` trait so it can be swapped or mocked.
//!
//! # Design
//! - `FetchHttpClientAdapter` is stateless; it holds only its transport.
//! - Server replies pass through verbatim, including 4xx/5xx statuses.
//! - Local failures never escape as errors; they become a synthesized
//!   `{statusCode: 500, body: {"error": ..}}` response.
//! - `ReqwestTransport` is the bundled production transport.

pub mod adapter;
pub mod error;
pub mod fetch;
pub mod http;
pub mod transport;

pub use adapter::{FetchHttpClientAdapter, HttpClient};
pub use error::FetchError;
pub use fetch::{FetchResponse, ReqwestTransport, TransportConfig};
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse, ParseMethodError};
pub use transport::{FetchOptions, Transport, TransportResponse};
