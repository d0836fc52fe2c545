//! Session & Auth State
//!
//! In-memory holder for the logged-in admin and bearer token, provided via
//! Leptos context. Owns the persisted session exclusively: [`crate::session`]
//! is called from nowhere else. The HTTP client and the route guard both
//! observe this holder instead of touching storage themselves.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::models::Admin;
use crate::session;

/// App-wide auth state provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Logged-in admin identity, `None` when unauthenticated
    pub admin: RwSignal<Option<Admin>>,
    /// Bearer token for outbound requests
    token: RwSignal<Option<String>>,
    /// True until the persisted session has been checked once
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            admin: RwSignal::new(None),
            token: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    /// One-shot startup check of the persisted session. Must run before any
    /// guarded screen issues a request; `loading` stays true until it has.
    pub fn initialize(&self) {
        if let Some((token, admin)) = session::load() {
            self.token.try_set(Some(token));
            self.admin.try_set(Some(admin));
        }
        self.loading.try_set(false);
    }

    /// Called from the login request's continuation, so the writes are the
    /// non-panicking variants in case the page was disposed mid-flight.
    pub fn login(&self, admin: Admin, token: String) {
        session::save(&token, &admin);
        self.token.try_set(Some(token));
        self.admin.try_set(Some(admin));
    }

    pub fn logout(&self) {
        session::clear();
        self.token.set(None);
        self.admin.set(None);
    }

    /// Invoked by the HTTP client when the backend answers 401. Clears the
    /// session and lets the route guard react to the state change; the caller
    /// still receives its rejection afterwards.
    pub fn expire(&self) {
        session::clear();
        self.token.try_set(None);
        self.admin.try_set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.admin.with_untracked(|a| a.is_some())
    }

    /// Current bearer token, untracked (read from async request paths).
    pub fn bearer_token(&self) -> Option<String> {
        self.token.get_untracked()
    }
}

/// Provides [`AuthContext`] and the authenticated API client to all children,
/// then performs the startup session check.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(crate::api::Api::new(auth));

    Effect::new(move |_| {
        auth.initialize();
    });

    children()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Route guard for dashboard screens.
///
/// While the session check is pending nothing is rendered; once checked, an
/// unauthenticated visitor is redirected to the login screen and the children
/// render only for an authenticated one.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.loading.get() && auth.admin.with(|a| a.is_none()) {
            navigate("/login", Default::default());
        }
    });

    view! {
        <Show
            when=move || !auth.loading.get() && auth.admin.with(|a| a.is_some())
            fallback=|| view! { <div class="auth-checking"></div> }
        >
            {children()}
        </Show>
    }
}
