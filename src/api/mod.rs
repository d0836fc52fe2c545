//! Backend API Bindings
//!
//! The authenticated client plus endpoint wrappers, organized by domain.

mod client;

mod admin;
mod posts;
mod profiles;
mod reports;
mod settings;
mod stats;
mod users;
mod watches;

use leptos::prelude::expect_context;

pub use client::{Api, ApiError};

pub use admin::*;
pub use posts::*;
pub use profiles::*;
pub use reports::*;
pub use settings::*;
pub use stats::*;
pub use users::*;
pub use watches::*;

/// Get the API handle from context (provided by `AuthProvider`).
pub fn use_api() -> Api {
    expect_context::<Api>()
}
