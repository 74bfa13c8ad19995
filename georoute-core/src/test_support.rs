//! Test doubles for code built on [`HttpTransport`].
//!
//! [`StubTransport`] replays pre-configured responses in order and records
//! every request it receives, letting adapter tests assert on the exact wire
//! shape without a running service.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::{HttpRequest, HttpTransport, TransportError};

/// Stub [`HttpTransport`] replaying queued responses.
///
/// When the queue is exhausted every further request fails with a
/// [`TransportError::Network`] error.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    /// Create a transport with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response.
    #[must_use]
    pub fn with_response(self, body: Value) -> Self {
        lock(&self.responses).push_back(Ok(body));
        self
    }

    /// Queue a failure.
    #[must_use]
    pub fn with_error(self, error: TransportError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Queue an HTTP error response with a JSON body.
    #[must_use]
    pub fn with_http_error(self, status: u16, status_text: &str, body: Value) -> Self {
        self.with_error(TransportError::Http {
            url: "https://stub.invalid".to_owned(),
            status,
            status_text: Some(status_text.to_owned()),
            body: Some(body),
        })
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn perform(&self, request: &HttpRequest) -> Result<Value, TransportError> {
        lock(&self.requests).push(request.clone());
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Network {
                    url: request.path_and_query(),
                    message: "no stubbed response left".to_owned(),
                })
            })
    }
}
