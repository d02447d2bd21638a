//! Generic HTTP request and response shapes.
//!
//! # Design
//! These types describe HTTP exchanges as plain data, independent of whatever
//! transport eventually carries them. Callers build an `HttpRequest`, hand it
//! to an `HttpClient`, and always get an `HttpResponse` back. Bodies are
//! arbitrary JSON values; serializing them to text is the adapter's job.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Header name to header value, passed to the transport unchanged.
pub type Headers = BTreeMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    /// The uppercase method token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known HTTP method token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// A transport-agnostic HTTP request.
///
/// `body` is `None` when no payload should be sent. Any `Some` value,
/// including an empty object or JSON `null`, is serialized and sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_body"
    )]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

/// A `body` key that is present, even as `null`, is a payload to send.
fn present_body<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            body: None,
            headers: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header, creating the header map on first use.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }
}

/// A transport-agnostic HTTP response.
///
/// Serializes as `{"statusCode": .., "body": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Value,
}

impl HttpResponse {
    /// Status code used for responses synthesized from local failures.
    pub const SYNTHESIZED_STATUS: u16 = 500;

    /// A response fabricated by the adapter when no real response exists.
    pub fn transport_failure(message: impl fmt::Display) -> Self {
        Self {
            status_code: Self::SYNTHESIZED_STATUS,
            body: json!({ "error": message.to_string() }),
        }
    }
}
