//! User account endpoints.

use super::{Api, ApiError};
use crate::models::UserAccount;

pub async fn list_users(api: Api) -> Result<Vec<UserAccount>, ApiError> {
    api.get_json("/users").await
}
