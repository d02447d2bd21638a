//! Verify the adapter against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector describes an input request, the transport call it should
//! produce, a simulated transport outcome, and the expected response.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use std::sync::Mutex;

use http_adapter::{
    FetchHttpClientAdapter, FetchOptions, Headers, HttpClient, HttpMethod, HttpRequest,
    HttpResponse, Transport, TransportResponse,
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct SimulatedError(String);

struct SimulatedResponse {
    status: u16,
    body: Value,
}

impl TransportResponse for SimulatedResponse {
    type Error = SimulatedError;

    fn status(&self) -> u16 {
        self.status
    }

    async fn json(self) -> Result<Value, SimulatedError> {
        Ok(self.body)
    }
}

/// Plays back the `transport` section of a single vector.
struct VectorTransport {
    outcome: Value,
    seen: Mutex<Option<(String, FetchOptions)>>,
}

impl Transport for VectorTransport {
    type Response = SimulatedResponse;
    type Error = SimulatedError;

    async fn fetch(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> Result<SimulatedResponse, SimulatedError> {
        *self.seen.lock().unwrap() = Some((url.to_string(), options));
        if let Some(message) = self.outcome["error"].as_str() {
            return Err(SimulatedError(message.to_string()));
        }
        Ok(SimulatedResponse {
            status: self.outcome["status"].as_u64().unwrap() as u16,
            body: self.outcome["body"].clone(),
        })
    }
}

fn expected_options(expected: &Value) -> FetchOptions {
    let method: HttpMethod = expected["method"].as_str().unwrap().parse().unwrap();
    let headers: Option<Headers> = serde_json::from_value(expected["headers"].clone()).unwrap();
    FetchOptions {
        method,
        body: expected["body"].as_str().map(str::to_string),
        headers,
    }
}

#[tokio::test]
async fn adapter_test_vectors() {
    let raw = include_str!("../../test-vectors/adapter.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request: HttpRequest = serde_json::from_value(case["request"].clone()).unwrap();

        let adapter = FetchHttpClientAdapter::new(VectorTransport {
            outcome: case["transport"].clone(),
            seen: Mutex::new(None),
        });
        let response = adapter.request(&request).await;

        // Verify the transport call
        let (url, options) = adapter.transport().seen.lock().unwrap().take().unwrap();
        assert_eq!(url, request.url, "{name}: url");
        let expected = expected_options(&case["expected_fetch"]);
        assert_eq!(options.method, expected.method, "{name}: method");
        assert_eq!(options.headers, expected.headers, "{name}: headers");
        match (&options.body, &expected.body) {
            (Some(sent), Some(want)) => {
                let sent: Value = serde_json::from_str(sent).unwrap();
                let want: Value = serde_json::from_str(want).unwrap();
                assert_eq!(sent, want, "{name}: body");
            }
            (sent, want) => assert_eq!(sent, want, "{name}: body"),
        }

        // Verify the adapted response
        let expected: HttpResponse =
            serde_json::from_value(case["expected_response"].clone()).unwrap();
        assert_eq!(response, expected, "{name}: response");
    }
}
