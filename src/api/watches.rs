//! Watch (short video) endpoints.

use super::{Api, ApiError};
use crate::models::{Watch, WatchDraft};

pub async fn list_watches(api: Api) -> Result<Vec<Watch>, ApiError> {
    api.get_json("/watches").await
}

pub async fn get_watch(api: Api, id: &str) -> Result<Watch, ApiError> {
    api.get_json(&format!("/watches/{id}")).await
}

pub async fn update_watch(api: Api, id: &str, draft: &WatchDraft) -> Result<(), ApiError> {
    api.put_json(&format!("/watches/{id}"), draft).await
}

pub async fn delete_watch(api: Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/watches/{id}")).await
}
