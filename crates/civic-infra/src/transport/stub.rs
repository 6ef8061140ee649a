//! Scripted in-memory transport - answers from a queue and records traffic.

use std::collections::VecDeque;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;

use civic_core::TransportError;
use civic_core::ports::{HttpRequest, HttpResponse, HttpTransport};

/// Transport that replays queued responses in FIFO order.
///
/// Every request is recorded, including ones that find the queue empty.
/// An exhausted queue answers with `TransportError::Connection`.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn with_response(mut self, response: HttpResponse) -> Self {
        self.responses.get_mut().push_back(Ok(response));
        self
    }

    /// Queue a response whose body is `body` serialized as JSON.
    pub fn with_json<T: Serialize>(self, status: u16, body: &T) -> Self {
        let bytes = serde_json::to_vec(body).unwrap_or_default();
        self.with_response(Self::response(status, bytes))
    }

    /// Queue a response with the given status and an empty body.
    pub fn with_status(self, status: u16) -> Self {
        self.with_response(Self::response(status, Vec::new()))
    }

    /// Queue a transport-level failure.
    pub fn with_error(mut self, error: TransportError) -> Self {
        self.responses.get_mut().push_back(Err(error));
        self
    }

    /// All requests sent so far, oldest first.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().await.last().cloned()
    }

    /// Responses still waiting to be served.
    pub async fn pending(&self) -> usize {
        self.responses.lock().await.len()
    }

    fn response(status: u16, body: Vec<u8>) -> HttpResponse {
        HttpResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::trace!(method = %request.method, url = %request.url, "stub transport send");
        self.requests.lock().await.push(request);

        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no scripted response".to_string())))
    }
}

// Only the statuses scripted in tests; anything else gets an empty phrase.
fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}
