//! Top Bar
//!
//! Admin identity chrome and logout. Logging out clears the session; the
//! route guard then redirects to the login screen.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::config;
use crate::view_model;

#[component]
pub fn TopBar() -> impl IntoView {
    let auth = use_auth();

    let full_name = move || {
        auth.admin
            .get()
            .and_then(|a| a.full_name)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let role = move || {
        auth.admin
            .get()
            .and_then(|a| a.role)
            .unwrap_or_else(|| "Administrator".to_string())
    };

    view! {
        <header class="top-bar">
            <div class="top-bar-spacer"></div>
            <Show when=|| config::ENABLE_NOTIFICATIONS>
                <button class="icon-btn notifications" title="Notifications">
                    "Notifications"
                </button>
            </Show>
            <div class="admin-chip">
                <div class="avatar">{move || view_model::initials(&full_name())}</div>
                <div class="admin-meta">
                    <p class="admin-name">{full_name}</p>
                    <p class="admin-role">{role}</p>
                </div>
            </div>
            <button class="logout-btn" on:click=move |_| auth.logout()>
                "Log out"
            </button>
        </header>
    }
}
