//! Post endpoints.

use super::{Api, ApiError};
use crate::models::{Post, PostDraft};

pub async fn list_posts(api: Api) -> Result<Vec<Post>, ApiError> {
    api.get_json("/posts").await
}

pub async fn get_post(api: Api, id: &str) -> Result<Post, ApiError> {
    api.get_json(&format!("/posts/{id}")).await
}

pub async fn update_post(api: Api, id: &str, draft: &PostDraft) -> Result<(), ApiError> {
    api.put_json(&format!("/posts/{id}"), draft).await
}

pub async fn delete_post(api: Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/posts/{id}")).await
}
