//! Profile endpoints.
//!
//! Note the backend's singular/plural split: the collection is `/profiles`,
//! single-profile operations go through `/profile/:id`.

use serde::Serialize;

use super::{Api, ApiError};
use crate::models::{Profile, ProfileDraft, SetPasswordPayload};

pub async fn list_profiles(api: Api) -> Result<Vec<Profile>, ApiError> {
    api.get_json("/profiles").await
}

pub async fn get_profile(api: Api, id: &str) -> Result<Profile, ApiError> {
    api.get_json(&format!("/profile/{id}")).await
}

pub async fn update_profile(api: Api, id: &str, draft: &ProfileDraft) -> Result<(), ApiError> {
    api.put_json(&format!("/profile/{id}"), draft).await
}

#[derive(Serialize)]
struct UserRef<'a> {
    user_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteProfileBody<'a> {
    user_data: UserRef<'a>,
}

/// Deleting a profile also tears down the linked user account, so the request
/// carries that account's id when known.
pub async fn delete_profile(api: Api, id: &str, user_id: Option<&str>) -> Result<(), ApiError> {
    let body = DeleteProfileBody {
        user_data: UserRef { user_id },
    };
    api.delete_with_body(&format!("/profile/{id}"), &body).await
}

pub async fn set_password(
    api: Api,
    id: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    let payload = SetPasswordPayload {
        new_password,
        confirm_password,
    };
    let _: serde_json::Value = api
        .post_json(&format!("/profile/{id}/set-password"), &payload)
        .await?;
    Ok(())
}
