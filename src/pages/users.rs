//! User Accounts Screen
//!
//! Read-only listing of raw account records with client-side search and sort.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::use_api;
use crate::list;
use crate::models::UserAccount;
use crate::view_model;

fn account_name(user: &UserAccount) -> String {
    let name = format!(
        "{} {}",
        user.first_name.as_deref().unwrap_or(""),
        user.surname.as_deref().unwrap_or("")
    );
    let name = name.trim();
    if name.is_empty() {
        view_model::UNKNOWN_USER.to_string()
    } else {
        name.to_string()
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let client = use_api();

    let (rows, set_rows) = signal(Vec::<UserAccount>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal("name-asc".to_string());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_users(client).await {
                Ok(users) => {
                    set_rows.try_set(users);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load users: {e}")));
                }
            }
            set_loading.try_set(false);
        });
    });

    let visible = move || {
        let term = search.get();
        let (field, order) = list::parse_sort_option(&sort.get());
        let mut users: Vec<UserAccount> = rows
            .get()
            .into_iter()
            .filter(|u| {
                list::matches_search(
                    &term,
                    &[&account_name(u), u.email.as_deref().unwrap_or("")],
                )
            })
            .collect();
        match field.as_str() {
            "joined" => list::sort_rows(
                &mut users,
                order,
                |u| view_model::timestamp_key(u.created_at.as_deref()),
                |u| u.id.clone(),
            ),
            _ => list::sort_rows(
                &mut users,
                order,
                |u| account_name(u).to_lowercase(),
                |u| u.id.clone(),
            ),
        }
        users
    };

    view! {
        <div class="page">
            <h2>"Users"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="list-controls">
                <input
                    type="search"
                    placeholder="Search by name or email"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
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
                            <th>"Gender"</th>
                            <th>"Joined"</th>
                            <th>"Last login"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|user| {
                            view! {
                                <tr>
                                    <td>{account_name(&user)}</td>
                                    <td>{user.email.clone().unwrap_or_else(|| "No email".to_string())}</td>
                                    <td>{user.gender.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{view_model::format_date(user.created_at.as_deref())}</td>
                                    <td>{view_model::format_datetime(user.last_login.as_deref())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || visible().is_empty()>
                    <p class="empty">"No users match the current search."</p>
                </Show>
            </Show>
        </div>
    }
}
