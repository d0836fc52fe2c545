//! Environment Configuration
//!
//! Build-time constants for the admin console. Values come from environment
//! variables at compile time and fall back to development defaults.

/// Backend origin, e.g. "http://localhost:4000"
pub const API_URL: &str = match option_env!("CONNECT_API_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

pub const APP_NAME: &str = match option_env!("CONNECT_APP_NAME") {
    Some(name) => name,
    None => "Admin Portal",
};

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display flags. Read-only to the rest of the app.
pub const ENABLE_NOTIFICATIONS: bool = option_env!("CONNECT_DISABLE_NOTIFICATIONS").is_none();
pub const ENABLE_DARK_MODE: bool = option_env!("CONNECT_DISABLE_DARK_MODE").is_none();

/// Admin API base: every relative client path hangs off this.
pub fn admin_base() -> String {
    format!("{}/api/admin", API_URL)
}

/// Global settings live outside the admin base.
pub fn settings_url() -> String {
    format!("{}/api/connect", API_URL)
}
