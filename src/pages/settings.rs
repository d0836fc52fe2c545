//! Site Settings Screen
//!
//! Edits the global remote config. A staged logo is uploaded before the
//! settings are written; the form then adopts the backend's canonical copy.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::use_api;
use crate::components::ImagePicker;
use crate::models::SiteSettings;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = use_api();

    let settings = RwSignal::new(SiteSettings::default());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let (saved, set_saved) = signal(false);

    let selected_logo = RwSignal::new(None::<web_sys::File>);
    let logo_preview = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_settings(client).await {
                Ok(s) => {
                    logo_preview.try_set(s.site_logo.clone());
                    settings.try_set(s);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load settings: {e}")));
                }
            }
            set_loaded.try_set(true);
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        set_saved.set(false);
        spawn_local(async move {
            let mut body = settings.get_untracked();

            if let Some(file) = selected_logo.get_untracked() {
                match client.upload(&file).await {
                    Ok(url) => body.site_logo = Some(url),
                    Err(e) => {
                        set_error.try_set(Some(format!("Logo upload failed: {e}")));
                        set_busy.try_set(false);
                        return;
                    }
                }
            }

            match api::save_settings(client, &body).await {
                Ok(canonical) => {
                    logo_preview.try_set(canonical.site_logo.clone());
                    settings.try_set(canonical);
                    selected_logo.try_set(None);
                    set_saved.try_set(true);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Save failed: {e}")));
                }
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="page">
            <h2>"Site settings"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || saved.get()>
                <p class="form-success">"Settings saved."</p>
            </Show>
            <Show when=move || loaded.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="edit-form" on:submit=on_submit>
                    <h3>"General"</h3>
                    <label>"Site title"</label>
                    <input
                        prop:value=move || settings.with(|s| s.site_title.clone())
                        on:input=move |ev| settings.update(|s| s.site_title = event_target_value(&ev))
                    />
                    <label>"Site description"</label>
                    <textarea
                        prop:value=move || settings.with(|s| s.site_description.clone())
                        on:input=move |ev| settings.update(|s| s.site_description = event_target_value(&ev))
                    ></textarea>
                    <label>"Site URL"</label>
                    <input
                        type="url"
                        prop:value=move || settings.with(|s| s.site_url.clone())
                        on:input=move |ev| settings.update(|s| s.site_url = event_target_value(&ev))
                    />
                    <ImagePicker selected=selected_logo preview=logo_preview label="Site logo"/>

                    <h3>"Defaults"</h3>
                    <label>"Theme"</label>
                    <select
                        prop:value=move || settings.with(|s| s.default_theme.clone())
                        on:change=move |ev| settings.update(|s| s.default_theme = event_target_value(&ev))
                    >
                        <option value="dark">"Dark"</option>
                        <option value="light">"Light"</option>
                    </select>
                    <label>"Language"</label>
                    <input
                        prop:value=move || settings.with(|s| s.default_language.clone())
                        on:input=move |ev| settings.update(|s| s.default_language = event_target_value(&ev))
                    />
                    <label>"Timezone"</label>
                    <input
                        prop:value=move || settings.with(|s| s.default_timezone.clone())
                        on:input=move |ev| settings.update(|s| s.default_timezone = event_target_value(&ev))
                    />

                    <h3>"Flags"</h3>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.show_ads)
                            on:change=move |ev| settings.update(|s| s.show_ads = event_target_checked(&ev))
                        />
                        "Show ads"
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.register_new_account)
                            on:change=move |ev| settings.update(|s| s.register_new_account = event_target_checked(&ev))
                        />
                        "Allow new registrations"
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.is_maintenance_mode)
                            on:change=move |ev| settings.update(|s| s.is_maintenance_mode = event_target_checked(&ev))
                        />
                        "Maintenance mode"
                    </label>

                    <h3>"Mobile app"</h3>
                    <label>"APK URL"</label>
                    <input
                        type="url"
                        prop:value=move || settings.with(|s| s.apk_url.clone())
                        on:input=move |ev| settings.update(|s| s.apk_url = event_target_value(&ev))
                    />
                    <label>"App version"</label>
                    <input
                        prop:value=move || settings.with(|s| s.app_version.clone())
                        on:input=move |ev| settings.update(|s| s.app_version = event_target_value(&ev))
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.is_new_version_available)
                            on:change=move |ev| settings.update(|s| s.is_new_version_available = event_target_checked(&ev))
                        />
                        "New version available"
                    </label>

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save settings" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
