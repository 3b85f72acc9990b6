use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream rejected the auth token (status 401)")]
    Unauthorized { details: Option<Value> },

    #[error("Upstream responded with status {status}")]
    Status { status: u16, details: Option<Value> },

    #[error("Upstream response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configured auth token is not a valid header value")]
    InvalidToken,
}

impl UpstreamError {
    /// Response body the vendor attached to a failed request.
    pub fn details(&self) -> Option<&Value> {
        match self {
            UpstreamError::Unauthorized { details } | UpstreamError::Status { details, .. } => {
                details.as_ref()
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Unauthorized { .. } => Some(401),
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Network(err)
        }
    }
}
