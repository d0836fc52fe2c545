//! Profile Screens
//!
//! List with search/filter/sort and delete, a read-only detail view, and the
//! edit form with the administrative password reset.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::api::use_api;
use crate::components::{DeleteConfirmModal, StatusBadge};
use crate::list;
use crate::models::{Profile, ProfileDraft};
use crate::view_model;

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let client = use_api();

    let (rows, set_rows) = signal(Vec::<Profile>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal("all".to_string());
    let (sort, set_sort) = signal("name-asc".to_string());

    // Delete flow state. The target doubles as the modal's open flag.
    let (delete_target, set_delete_target) = signal(None::<Profile>);
    let (delete_busy, set_delete_busy) = signal(false);
    let (delete_error, set_delete_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_profiles(client).await {
                Ok(profiles) => {
                    set_rows.try_set(profiles);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load profiles: {e}")));
                }
            }
            set_loading.try_set(false);
        });
    });

    let visible = move || {
        let term = search.get();
        let facet = status_filter.get();
        let (field, order) = list::parse_sort_option(&sort.get());
        let mut profiles: Vec<Profile> = rows
            .get()
            .into_iter()
            .filter(|p| {
                list::matches_search(
                    &term,
                    &[
                        &view_model::profile_name(p),
                        &view_model::profile_email(p),
                        p.username.as_deref().unwrap_or(""),
                    ],
                )
            })
            .filter(|p| list::matches_facet(&facet, view_model::profile_status(p)))
            .collect();
        match field.as_str() {
            "joined" => list::sort_rows(
                &mut profiles,
                order,
                |p| view_model::timestamp_key(p.created_at.as_deref()),
                |p| p.id.clone(),
            ),
            _ => list::sort_rows(
                &mut profiles,
                order,
                |p| view_model::profile_name(p).to_lowercase(),
                |p| p.id.clone(),
            ),
        }
        profiles
    };

    let confirm_delete = Callback::new(move |()| {
        let target = match delete_target.get_untracked() {
            Some(profile) => profile,
            None => return,
        };
        if delete_busy.get_untracked() {
            return;
        }
        set_delete_busy.set(true);
        set_delete_error.set(None);
        spawn_local(async move {
            let user_id = target.user.as_ref().map(|u| u.id.clone());
            match api::delete_profile(client, &target.id, user_id.as_deref()).await {
                Ok(()) => {
                    set_rows.try_update(|rows| {
                        list::remove_by_id(rows, &target.id, |p| &p.id);
                    });
                    set_delete_target.try_set(None);
                }
                Err(e) => {
                    // Keep the modal open so the operator can retry.
                    set_delete_error.try_set(Some(format!("Delete failed: {e}")));
                }
            }
            set_delete_busy.try_set(false);
        });
    });

    let cancel_delete = Callback::new(move |()| {
        if !delete_busy.get_untracked() {
            set_delete_target.set(None);
            set_delete_error.set(None);
        }
    });

    view! {
        <div class="page">
            <h2>"Profiles"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="list-controls">
                <input
                    type="search"
                    placeholder="Search by name, email or username"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=status_filter
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                    <option value="suspended">"Suspended"</option>
                </select>
                <select
                    prop:value=sort
                    on:change=move |ev| set_sort.set(event_target_value(&ev))
                >
                    <option value="name-asc">"Name (A-Z)"</option>
                    <option value="name-desc">"Name (Z-A)"</option>
                    <option value="joined-desc">"Newest first"</option>
                    <option value="joined-asc">"Oldest first"</option>
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Status"</th>
                            <th>"Last active"</th>
                            <th>"Joined"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|profile| {
                            let id = profile.id.clone();
                            let row = profile.clone();
                            view! {
                                <tr>
                                    <td>{view_model::profile_name(&profile)}</td>
                                    <td>{view_model::profile_email(&profile)}</td>
                                    <td><StatusBadge status=view_model::profile_status(&profile)/></td>
                                    <td>{view_model::last_active(&profile)}</td>
                                    <td>{view_model::format_date(profile.created_at.as_deref())}</td>
                                    <td class="row-actions">
                                        <A href=format!("/dashboard/profiles/{id}")>"View"</A>
                                        <A href=format!("/dashboard/profiles/{id}/edit")>"Edit"</A>
                                        <button
                                            class="btn-link danger"
                                            on:click=move |_| {
                                                set_delete_error.set(None);
                                                set_delete_target.set(Some(row.clone()));
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || visible().is_empty()>
                    <p class="empty">"No profiles match the current filters."</p>
                </Show>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteConfirmModal
                    title="Delete profile"
                    message=Signal::derive(move || {
                        let name = delete_target
                            .get()
                            .map(|p| view_model::profile_name(&p))
                            .unwrap_or_default();
                        format!("Delete {name} and the linked user account? This cannot be undone.")
                    })
                    busy=delete_busy
                    error=delete_error
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </Show>
        </div>
    }
}

#[component]
pub fn ProfileViewPage() -> impl IntoView {
    let client = use_api();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let (profile, set_profile) = signal(None::<Profile>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_profile(client, &id).await {
                Ok(p) => {
                    set_profile.try_set(Some(p));
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load profile: {e}")));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Profile"</h2>
                <A href=move || format!("/dashboard/profiles/{}/edit", id()) attr:class="btn-primary">
                    "Edit"
                </A>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || profile.get().map(|p| {
                let friends = p.friends.len();
                let following = p.following.len();
                let has_pic = p.profile_pic.is_some();
                let pic_url = p.profile_pic.clone().unwrap_or_default();
                view! {
                    <div class="detail-card">
                        <Show when=move || has_pic>
                            <img class="profile-pic" src=pic_url.clone()/>
                        </Show>
                        <h3>{view_model::profile_name(&p)}</h3>
                        <StatusBadge status=view_model::profile_status(&p)/>
                        <dl>
                            <dt>"Username"</dt>
                            <dd>{p.username.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Email"</dt>
                            <dd>{view_model::profile_email(&p)}</dd>
                            <dt>"Bio"</dt>
                            <dd>{p.bio.clone().unwrap_or_default()}</dd>
                            <dt>"Friends"</dt>
                            <dd>{friends}</dd>
                            <dt>"Following"</dt>
                            <dd>{following}</dd>
                            <dt>"Present address"</dt>
                            <dd>{p.present_address.clone().unwrap_or_default()}</dd>
                            <dt>"Permanent address"</dt>
                            <dd>{p.permanent_address.clone().unwrap_or_default()}</dd>
                            <dt>"Last active"</dt>
                            <dd>{view_model::last_active(&p)}</dd>
                            <dt>"Joined"</dt>
                            <dd>{view_model::format_date(p.created_at.as_deref())}</dd>
                        </dl>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let client = use_api();
    let params = use_params_map();
    // Stored so the submit handler stays Copy for the reactive view tree.
    let navigate = StoredValue::new(use_navigate());
    let id = move || params.read().get("id").unwrap_or_default();

    let draft = RwSignal::new(ProfileDraft::default());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let (saved, set_saved) = signal(false);

    // Password reset form, independent of the main draft.
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_busy, set_password_busy) = signal(false);
    let (password_message, set_password_message) = signal(None::<String>);

    Effect::new(move |_| {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_profile(client, &id).await {
                Ok(p) => {
                    draft.try_set(ProfileDraft::from_profile(&p));
                    set_loaded.try_set(true);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load profile: {e}")));
                }
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        let id = id();
        spawn_local(async move {
            let body = draft.get_untracked();
            match api::update_profile(client, &id, &body).await {
                Ok(()) => {
                    set_saved.try_set(true);
                    gloo_timers::future::TimeoutFuture::new(1_500).await;
                    let _ = navigate.try_with_value(|nav| {
                        nav(&format!("/dashboard/profiles/{id}"), Default::default())
                    });
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Save failed: {e}")));
                }
            }
            set_busy.try_set(false);
        });
    };

    let on_set_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        if password_busy.get_untracked() {
            return;
        }
        let new = new_password.get_untracked();
        let confirm = confirm_password.get_untracked();
        if new != confirm {
            set_password_message.set(Some("Passwords do not match".to_string()));
            return;
        }
        set_password_busy.set(true);
        set_password_message.set(None);
        let id = id();
        spawn_local(async move {
            match api::set_password(client, &id, &new, &confirm).await {
                Ok(()) => {
                    set_password_message.try_set(Some("Password updated".to_string()));
                    set_new_password.try_set(String::new());
                    set_confirm_password.try_set(String::new());
                }
                Err(e) => {
                    set_password_message.try_set(Some(format!("Password update failed: {e}")));
                }
            }
            set_password_busy.try_set(false);
        });
    };

    view! {
        <div class="page">
            <h2>"Edit profile"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || saved.get()>
                <p class="form-success">"Profile saved. Redirecting..."</p>
            </Show>
            <Show when=move || loaded.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="edit-form" on:submit=on_submit>
                    <label>"First name"</label>
                    <input
                        prop:value=move || draft.with(|d| d.first_name.clone())
                        on:input=move |ev| draft.update(|d| d.first_name = event_target_value(&ev))
                    />
                    <label>"Surname"</label>
                    <input
                        prop:value=move || draft.with(|d| d.surname.clone())
                        on:input=move |ev| draft.update(|d| d.surname = event_target_value(&ev))
                    />
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <label>"Bio"</label>
                    <textarea
                        prop:value=move || draft.with(|d| d.bio.clone())
                        on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
                    ></textarea>
                    <label>"Gender"</label>
                    <select
                        prop:value=move || draft.with(|d| d.gender.clone())
                        on:change=move |ev| draft.update(|d| d.gender = event_target_value(&ev))
                    >
                        <option value="">"Unspecified"</option>
                        <option value="male">"Male"</option>
                        <option value="female">"Female"</option>
                        <option value="other">"Other"</option>
                    </select>
                    <label>"Date of birth"</label>
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.dob.clone())
                        on:input=move |ev| draft.update(|d| d.dob = event_target_value(&ev))
                    />
                    <label>"Present address"</label>
                    <input
                        prop:value=move || draft.with(|d| d.present_address.clone())
                        on:input=move |ev| draft.update(|d| d.present_address = event_target_value(&ev))
                    />
                    <label>"Permanent address"</label>
                    <input
                        prop:value=move || draft.with(|d| d.permanent_address.clone())
                        on:input=move |ev| draft.update(|d| d.permanent_address = event_target_value(&ev))
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.is_active)
                            on:change=move |ev| draft.update(|d| d.is_active = event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </form>

                <form class="edit-form password-form" on:submit=on_set_password>
                    <h3>"Set password"</h3>
                    <Show when=move || password_message.get().is_some()>
                        <p class="form-note">{move || password_message.get().unwrap_or_default()}</p>
                    </Show>
                    <label>"New password"</label>
                    <input
                        type="password"
                        required
                        prop:value=new_password
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                    />
                    <label>"Confirm password"</label>
                    <input
                        type="password"
                        required
                        prop:value=confirm_password
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-secondary" disabled=move || password_busy.get()>
                        {move || if password_busy.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
