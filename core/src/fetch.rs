//! `Transport` implementation backed by `reqwest`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::http::{Headers, HttpMethod};
use crate::transport::{FetchOptions, Transport, TransportResponse};

/// Settings used to build the underlying `reqwest::Client`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Sent as `User-Agent` unless a request sets its own.
    pub user_agent: Option<String>,
    /// Refuse plain `http://` URLs.
    pub https_only: bool,
}

/// Production transport. Cloning shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &TransportConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().https_only(config.https_only);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(FetchError::Build)?;
        Ok(Self { client })
    }
}

fn header_map(headers: &Headers) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || FetchError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        // Names that differ only in case collapse to one header; keep every value.
        map.append(header_name, header_value);
    }
    Ok(map)
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Options => Method::OPTIONS,
    }
}

/// An empty payload (HEAD replies, 204s) decodes as `null`.
fn decode_json(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
}

impl Transport for ReqwestTransport {
    type Response = FetchResponse;
    type Error = FetchError;

    async fn fetch(&self, url: &str, options: FetchOptions) -> Result<FetchResponse, FetchError> {
        let mut builder = self.client.request(reqwest_method(options.method), url);
        if let Some(headers) = &options.headers {
            builder = builder.headers(header_map(headers)?);
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(FetchError::Request)?;
        tracing::debug!(url, status = response.status().as_u16(), "transport response received");
        Ok(FetchResponse { inner: response })
    }
}

/// Response returned by `ReqwestTransport`.
#[derive(Debug)]
pub struct FetchResponse {
    inner: reqwest::Response,
}

impl TransportResponse for FetchResponse {
    type Error = FetchError;

    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn json(self) -> Result<Value, FetchError> {
        let bytes = self.inner.bytes().await.map_err(FetchError::Body)?;
        Ok(decode_json(&bytes)?)
    }
}
