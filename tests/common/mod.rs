//! Shared helpers for integration tests
#![allow(dead_code)]

use coolify_mcp::platform::api::{ApiRequest, CoolifyApiError, CoolifyClient, Method, Transport};
use coolify_mcp::tools::ToolRouter;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Canned answer for one request
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Value),
    Status(u16, String),
}

/// Transport that records requests and replays canned answers.
///
/// Once the queue is empty every request gets `null`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(body: Value) -> Self {
        let transport = Self::new();
        transport.push(Reply::Body(body));
        transport
    }

    pub fn failing(status: u16, body: &str) -> Self {
        let transport = Self::new();
        transport.push(Reply::Status(status, body.to_string()));
        transport
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> coolify_mcp::platform::api::Result<Value> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, body)) => Err(CoolifyApiError::from_response(status, &body)),
            None => Ok(Value::Null),
        }
    }
}

/// Router over a clone of the given transport
pub fn router(transport: &MockTransport) -> ToolRouter<MockTransport> {
    ToolRouter::new(CoolifyClient::new(transport.clone()))
}

pub fn assert_request(request: &ApiRequest, method: Method, path: &str) {
    assert_eq!(request.method, method, "method for {}", path);
    assert_eq!(request.path, path);
}
