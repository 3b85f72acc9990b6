use std::time::Duration;

use avmon_api::models::*;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP client for the dashboard backend.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_all_rooms(&self) -> Result<RoomListResponse> {
        self.get("/rooms").await
    }

    pub async fn get_room_stats(&self) -> Result<RoomStatsResponse> {
        self.get("/rooms/stats").await
    }

    pub async fn get_room_by_id(&self, room_id: &str) -> Result<RoomDetailResponse> {
        self.get(&format!("/rooms/{room_id}")).await
    }

    pub async fn get_room_activity(&self, room_id: &str) -> Result<RoomDetailResponse> {
        self.get(&format!("/rooms/{room_id}/activity")).await
    }

    pub async fn get_all_devices(&self) -> Result<DeviceListResponse> {
        self.get("/devices").await
    }

    pub async fn get_device_stats(&self) -> Result<DeviceStatsResponse> {
        self.get("/devices/stats").await
    }

    pub async fn get_all_alerts(&self) -> Result<AlertListResponse> {
        self.get("/alerts").await
    }

    pub async fn get_all_locations(&self) -> Result<LocationListResponse> {
        self.get("/locations").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .inspect_err(|e| tracing::error!("Error fetching {}: {}", path, e))?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            tracing::error!(status = status.as_u16(), "Error fetching {}: {}", path, message);

            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
