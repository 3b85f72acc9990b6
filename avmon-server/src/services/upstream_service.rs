use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::configs::Upstream as UpstreamSettings;
use crate::errors::UpstreamError;

/// A successful vendor reply.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

/// Read access to the vendor API.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GETs `path` (relative to the vendor base URL) and decodes the body as JSON.
    async fn fetch_response(&self, path: &str) -> Result<UpstreamResponse, UpstreamError>;

    async fn fetch(&self, path: &str) -> Result<Value, UpstreamError> {
        Ok(self.fetch_response(path).await?.body)
    }
}

/// Vendor path templates.
pub mod paths {
    use super::*;

    /// Everything but unreserved characters, so an id always stays one path segment.
    const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

    fn segment(value: &str) -> String {
        utf8_percent_encode(value, SEGMENT).to_string()
    }

    /// Ids made only of dots would still be read as `.` or `..` segments once encoded.
    pub fn is_valid_room_id(room_id: &str) -> bool {
        !room_id.is_empty() && !room_id.chars().all(|c| c == '.')
    }

    pub fn rooms(org_id: &str) -> String {
        format!("/org/{org_id}/channel?realm=Rooms")
    }

    pub fn room_info(org_id: &str, room_id: &str) -> String {
        format!("/org/{org_id}/room/{}/info", segment(room_id))
    }

    pub fn room_activity(org_id: &str, room_id: &str) -> String {
        format!("/org/{org_id}/room/{}/activity", segment(room_id))
    }

    /// Locations the inventory has been seen at, or guessed to live at.
    pub fn inventory_candidates(org_id: &str) -> Vec<String> {
        vec![
            format!("/inventory/{org_id}"),
            format!("/session/inventory/{org_id}"),
            format!("/org/{org_id}/inventory"),
            format!("/org/{org_id}/rooms"),
            format!("/org/{org_id}/essentialRooms"),
            format!("/api/org/{org_id}/rooms"),
            format!("/api/inventory/{org_id}"),
            format!("/api/session/inventory/{org_id}"),
            format!("/v1/inventory/{org_id}"),
            format!("/v1/org/{org_id}/inventory"),
        ]
    }
}

pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let mut authorization = HeaderValue::from_str(&authorization_value(&settings.auth_token))
            .map_err(|_| UpstreamError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Upstream for UpstreamClient {
    async fn fetch_response(&self, path: &str) -> Result<UpstreamResponse, UpstreamError> {
        tracing::info!("GET {}", path);

        let response = match self.http.get(format!("{}{}", self.base_url, path)).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("GET {} failed: {}", path, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            tracing::info!(status = status.as_u16(), "GET {} succeeded", path);

            let body = if body.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&body)?
            };
            return Ok(UpstreamResponse {
                status: status.as_u16(),
                body,
            });
        }

        let details = (!body.is_empty()).then(|| {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        });

        tracing::error!(status = status.as_u16(), details = ?details, "GET {} failed", path);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            log_token_refresh_steps();
            return Err(UpstreamError::Unauthorized { details });
        }

        Err(UpstreamError::Status {
            status: status.as_u16(),
            details,
        })
    }
}

/// Tokens copied from a browser session already carry their scheme.
fn authorization_value(token: &str) -> String {
    let token = token.trim();
    if token.contains(' ') {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

fn log_token_refresh_steps() {
    tracing::warn!(
        "upstream auth token expired, refresh it manually:\n\
         \x20 1. Open the vendor management console in a browser and reload the page\n\
         \x20 2. Open the developer tools, Network tab, filter on Fetch/XHR\n\
         \x20 3. Select any API request and copy the Authorization request header\n\
         \x20 4. Set AVMON_UPSTREAM__AUTH_TOKEN (or upstream.auth_token) to the copied value\n\
         \x20 5. Restart this server"
    );
}
