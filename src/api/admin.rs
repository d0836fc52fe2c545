//! Admin account endpoints.

use super::{Api, ApiError};
use crate::models::{LoginPayload, LoginResponse};

pub async fn login(api: Api, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    api.post_json("/login", &LoginPayload { email, password })
        .await
}
