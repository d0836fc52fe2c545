//! Moderation report endpoints.

use super::{Api, ApiError};
use crate::models::{Report, ReportStatusPayload};

pub async fn list_profile_reports(api: Api) -> Result<Vec<Report>, ApiError> {
    api.get_json("/reports/profiles").await
}

pub async fn update_report_status(api: Api, id: &str, status: &str) -> Result<(), ApiError> {
    api.put_json(&format!("/reports/{id}/status"), &ReportStatusPayload { status })
        .await
}
