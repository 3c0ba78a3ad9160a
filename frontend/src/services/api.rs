use anyhow::anyhow;
use chrono::NaiveDate;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    decode_payload, export_url, officer_url, overall_url, ApiBaseSource, DashboardConfig,
    ExportFormat, FetchError, OfficerPayload, OverallPayload,
};
use web_sys::RequestCredentials;

use crate::services::logging::Logger;

/// API client for the PAR backend. Every request carries the session
/// cookies.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Resolve the base URL from the config and the page's host name.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let hostname = gloo::utils::window()
            .location()
            .hostname()
            .unwrap_or_default();
        let base = config.resolve_api_base(&hostname);

        let origin = match base.source {
            ApiBaseSource::Override => "build-time override",
            ApiBaseSource::LocalHost => "local development host",
            ApiBaseSource::SameOrigin => "same origin",
        };
        Logger::info_with_component("api", &format!("API base '{}' ({})", base.url, origin));

        Self { base_url: base.url }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Portfolio-wide snapshot, weekly series and officer list.
    pub async fn get_overall(&self, date: NaiveDate) -> Result<OverallPayload, FetchError> {
        self.get_json(&overall_url(&self.base_url, date), "/api/overall")
            .await
    }

    /// Snapshot and weekly series for one collection officer.
    pub async fn get_officer(
        &self,
        officer: &str,
        date: NaiveDate,
    ) -> Result<OfficerPayload, FetchError> {
        self.get_json(&officer_url(&self.base_url, officer, date), "/api/officer")
            .await
    }

    /// Raw bytes of a backend-rendered export.
    pub async fn download_export(
        &self,
        format: ExportFormat,
        officer: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<u8>> {
        let url = export_url(&self.base_url, format, officer, date);
        let response = Self::send(&url)
            .await
            .map_err(|e| anyhow!("requesting {} export: {}", format.label(), e))?;

        if !response.ok() {
            return Err(anyhow!("Export failed: {}", response.status()));
        }
        response
            .binary()
            .await
            .map_err(|e| anyhow!("reading export body: {}", e))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, path: &str) -> Result<T, FetchError> {
        let response = Self::send(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode_payload(&body)
    }

    async fn send(url: &str) -> Result<Response, gloo::net::Error> {
        Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
    }
}
