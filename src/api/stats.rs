//! Dashboard statistics endpoint.

use super::{Api, ApiError};
use crate::models::StatsResponse;

pub async fn fetch_stats(api: Api) -> Result<StatsResponse, ApiError> {
    api.get_json("/stats").await
}
