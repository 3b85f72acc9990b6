use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::UpstreamError;
use crate::services::{Upstream, UpstreamResponse};

#[derive(Debug, Clone)]
enum Reply {
    Json(u16, Value),
    Status(u16, Option<Value>),
}

/// In-memory stand-in for the vendor API, keyed by request path.
///
/// Paths with no configured reply answer with a 404.
#[derive(Debug, Default)]
pub struct MockUpstream {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: impl Into<String>, body: Value) -> Self {
        self.with_response(path, 200, body)
    }

    /// A successful reply with a status other than 200.
    pub fn with_response(mut self, path: impl Into<String>, status: u16, body: Value) -> Self {
        self.replies.insert(path.into(), Reply::Json(status, body));
        self
    }

    pub fn with_status(mut self, path: impl Into<String>, status: u16, details: Option<Value>) -> Self {
        self.replies.insert(path.into(), Reply::Status(status, details));
        self
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn fetch_response(&self, path: &str) -> Result<UpstreamResponse, UpstreamError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_string());
        }

        match self.replies.get(path).cloned() {
            Some(Reply::Json(status, body)) => Ok(UpstreamResponse { status, body }),
            Some(Reply::Status(401, details)) => Err(UpstreamError::Unauthorized { details }),
            Some(Reply::Status(status, details)) => Err(UpstreamError::Status { status, details }),
            None => Err(UpstreamError::Status {
                status: 404,
                details: None,
            }),
        }
    }
}
