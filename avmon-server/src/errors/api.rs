use super::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    UpstreamError(#[from] UpstreamError),

    #[error("Invalid room id: {0}")]
    InvalidRoomId(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
