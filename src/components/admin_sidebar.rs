//! Admin Sidebar
//!
//! Fixed navigation column shared by every dashboard screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Users", "/dashboard/users"),
    ("Profiles", "/dashboard/profiles"),
    ("Posts", "/dashboard/posts"),
    ("Watch", "/dashboard/watch"),
    ("Reports", "/dashboard/reports/profiles"),
    ("Settings", "/dashboard/settings"),
];

fn is_active(current: &str, href: &str) -> bool {
    if href == "/dashboard" {
        current == href
    } else {
        current.starts_with(href)
    }
}

/// Sidebar with the active section highlighted.
#[component]
pub fn AdminSidebar(#[prop(into)] current: Signal<String>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h1>{config::APP_NAME}</h1>
            </div>
            <nav class="sidebar-nav">
                <ul>
                    {NAV_ITEMS.iter().map(|(name, href)| {
                        view! {
                            <li>
                                <A
                                    href=*href
                                    attr:class=move || {
                                        if is_active(&current.get(), href) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                >
                                    {*name}
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
            <div class="sidebar-footer">
                <span class="app-version">{format!("v{}", config::APP_VERSION)}</span>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_matching() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(!is_active("/dashboard/posts", "/dashboard"));
        assert!(is_active("/dashboard/posts/42/edit", "/dashboard/posts"));
        assert!(is_active("/dashboard/reports/profiles", "/dashboard/reports/profiles"));
    }
}
