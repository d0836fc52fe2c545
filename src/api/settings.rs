//! Global site settings endpoints.
//!
//! Settings are served from `/api/connect`, outside the admin base path.

use super::{Api, ApiError};
use crate::config;
use crate::models::SiteSettings;

pub async fn fetch_settings(api: Api) -> Result<SiteSettings, ApiError> {
    api.get_json_at(&config::settings_url()).await
}

/// Saves the settings and returns the backend's canonical copy.
pub async fn save_settings(api: Api, settings: &SiteSettings) -> Result<SiteSettings, ApiError> {
    api.put_json_at(&config::settings_url(), settings).await
}
