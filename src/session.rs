//! Persisted Session Storage
//!
//! The single module that touches the browser's LocalStorage session keys.
//! Everything else goes through [`crate::auth::AuthContext`], which owns the
//! in-memory session and is the only caller of these functions.

use gloo_storage::{LocalStorage, Storage};

use crate::models::Admin;

const TOKEN_KEY: &str = "adminToken";
const ADMIN_KEY: &str = "adminData";

/// Read the persisted session. Returns `None` unless both the token and a
/// parseable admin record are present; a half-present or corrupt session is
/// cleared so the next read starts clean.
pub fn load() -> Option<(String, Admin)> {
    let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
    let raw: Option<String> = LocalStorage::get(ADMIN_KEY).ok();

    match (token, raw) {
        (Some(token), Some(raw)) => match serde_json::from_str::<Admin>(&raw) {
            Ok(admin) => Some((token, admin)),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("discarding unparseable stored session: {err}").into(),
                );
                clear();
                None
            }
        },
        (None, None) => None,
        _ => {
            clear();
            None
        }
    }
}

pub fn save(token: &str, admin: &Admin) {
    if LocalStorage::set(TOKEN_KEY, token).is_err() {
        web_sys::console::warn_1(&"failed to persist session token".into());
    }
    if let Ok(raw) = serde_json::to_string(admin) {
        let _ = LocalStorage::set(ADMIN_KEY, raw);
    }
}

pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(ADMIN_KEY);
}
