//! Mock transport for testing without API access.
//!
//! Serves canned JSON bodies (or canned failures) in order and records
//! every call so tests can assert on the URL and query parameters sent.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;

use crate::transport::{Transport, TransportError};

/// Canned outcome served by [`MockTransport`].
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Succeed with this JSON body.
    Body(Value),
    /// Fail with a transport error carrying this message.
    Fail(String),
}

/// One recorded `perform_get` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

impl RecordedCall {
    /// Look up a query parameter by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport that replays canned outcomes.
///
/// Outcomes are consumed front to back, one per call; a call with no
/// outcome remaining fails.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Mock that serves the given outcomes in order.
    pub fn new(outcomes: impl IntoIterator<Item = MockOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that serves a single JSON body.
    pub fn with_body(body: Value) -> Self {
        Self::new([MockOutcome::Body(body)])
    }

    /// Mock that fails its single call.
    pub fn with_failure(message: impl Into<String>) -> Self {
        Self::new([MockOutcome::Fail(message.into())])
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock").clone()
    }
}

impl Transport for MockTransport {
    fn perform_get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Value, TransportError>> + Send {
        self.calls.lock().expect("mock lock").push(RecordedCall {
            url: url.to_string(),
            params: params.to_vec(),
        });
        let outcome = self.outcomes.lock().expect("mock lock").pop_front();

        async move {
            match outcome {
                Some(MockOutcome::Body(body)) => Ok(body),
                Some(MockOutcome::Fail(message)) => Err(TransportError::Other(message)),
                None => Err(TransportError::Other(
                    "mock transport has no outcome remaining".to_string(),
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn serves_body_and_records_call() {
        let mock = MockTransport::with_body(json!({"status": "OK"}));

        let body = mock
            .perform_get("http://example.test/json", &[("key", "k".to_string())])
            .await
            .unwrap();

        assert_eq!(body, json!({"status": "OK"}));

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "http://example.test/json");
        assert_eq!(calls[0].param("key"), Some("k"));
    }

    #[tokio::test]
    async fn serves_outcomes_in_order() {
        let mock = MockTransport::new([
            MockOutcome::Body(json!(1)),
            MockOutcome::Fail("down".to_string()),
        ]);

        assert_eq!(mock.perform_get("u", &[]).await.unwrap(), json!(1));
        assert!(mock.perform_get("u", &[]).await.is_err());
    }

    #[tokio::test]
    async fn exhausted_mock_fails() {
        let mock = MockTransport::new([]);

        let result = mock.perform_get("u", &[]).await;

        assert!(matches!(result, Err(TransportError::Other(_))));
    }
}
