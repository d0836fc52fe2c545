//! Admin Console App
//!
//! Router shell: the login screen is public, everything under /dashboard is
//! behind the auth guard and shares the sidebar/top-bar layout.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::auth::{AuthProvider, RequireAuth};
use crate::components::{AdminSidebar, TopBar};
use crate::config;
use crate::pages::{
    DashboardPage, LoginPage, PostEditPage, PostViewPage, PostsPage, ProfileEditPage,
    ProfileReportsPage, ProfileViewPage, ProfilesPage, SettingsPage, UsersPage, WatchEditPage,
    WatchViewPage, WatchesPage,
};

fn shell_class() -> &'static str {
    if config::ENABLE_DARK_MODE {
        "dashboard-shell theme-dark"
    } else {
        "dashboard-shell"
    }
}

#[component]
fn DashboardLayout() -> impl IntoView {
    let location = use_location();
    let current = Signal::derive(move || location.pathname.get());

    view! {
        <RequireAuth>
            <div class=shell_class()>
                <AdminSidebar current=current/>
                <div class="dashboard-main">
                    <TopBar/>
                    <main class="dashboard-content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=path!("/login") view=LoginPage/>
                    <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                        <Route path=path!("") view=DashboardPage/>
                        <Route path=path!("users") view=UsersPage/>
                        <Route path=path!("profiles") view=ProfilesPage/>
                        <Route path=path!("profiles/:id") view=ProfileViewPage/>
                        <Route path=path!("profiles/:id/edit") view=ProfileEditPage/>
                        <Route path=path!("posts") view=PostsPage/>
                        <Route path=path!("posts/:id") view=PostViewPage/>
                        <Route path=path!("posts/:id/edit") view=PostEditPage/>
                        <Route path=path!("watch") view=WatchesPage/>
                        <Route path=path!("watch/:id") view=WatchViewPage/>
                        <Route path=path!("watch/:id/edit") view=WatchEditPage/>
                        <Route path=path!("reports/profiles") view=ProfileReportsPage/>
                        <Route path=path!("settings") view=SettingsPage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_class_reflects_dark_mode_flag() {
        let class = shell_class();
        assert!(class.starts_with("dashboard-shell"));
        assert_eq!(class.contains("theme-dark"), config::ENABLE_DARK_MODE);
    }
}
