//! Login Screen

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::api::use_api;
use crate::auth::use_auth;
use crate::config;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let client = use_api();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    // An already authenticated visitor goes straight to the dashboard. This
    // also fires right after a successful login sets the session.
    Effect::new(move |_| {
        if !auth.loading.get() && auth.admin.with(|a| a.is_some()) {
            navigate("/dashboard", Default::default());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::login(client, &email, &password).await {
                Ok(res) => auth.login(res.admin, res.access_token),
                Err(e) => {
                    set_error.try_set(Some(format!("Login failed: {e}")));
                }
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{config::APP_NAME}</h1>
                <p class="login-subtitle">"Sign in to manage the platform"</p>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form on:submit=on_submit>
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
