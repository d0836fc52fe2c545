//! Watch Screens
//!
//! Short-form video management: list with search/sort and delete, detail
//! view, and a small edit form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::api::use_api;
use crate::components::DeleteConfirmModal;
use crate::list;
use crate::models::{Watch, WatchDraft};
use crate::view_model;

#[component]
pub fn WatchesPage() -> impl IntoView {
    let client = use_api();

    let (rows, set_rows) = signal(Vec::<Watch>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let (kind_filter, set_kind_filter) = signal("all".to_string());
    let (sort, set_sort) = signal("created-desc".to_string());

    let (delete_target, set_delete_target) = signal(None::<Watch>);
    let (delete_busy, set_delete_busy) = signal(false);
    let (delete_error, set_delete_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_watches(client).await {
                Ok(watches) => {
                    set_rows.try_set(watches);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load watch videos: {e}")));
                }
            }
            set_loading.try_set(false);
        });
    });

    let visible = move || {
        let term = search.get();
        let facet = kind_filter.get();
        let (field, order) = list::parse_sort_option(&sort.get());
        let mut watches: Vec<Watch> = rows
            .get()
            .into_iter()
            .filter(|w| {
                list::matches_search(
                    &term,
                    &[
                        w.caption.as_deref().unwrap_or(""),
                        &view_model::author_name(w.author.as_ref()),
                    ],
                )
            })
            .filter(|w| list::matches_facet(&facet, &view_model::watch_kind(w)))
            .collect();
        match field.as_str() {
            "author" => list::sort_rows(
                &mut watches,
                order,
                |w| view_model::author_name(w.author.as_ref()).to_lowercase(),
                |w| w.id.clone(),
            ),
            _ => list::sort_rows(
                &mut watches,
                order,
                |w| view_model::timestamp_key(w.created_at.as_deref()),
                |w| w.id.clone(),
            ),
        }
        watches
    };

    let confirm_delete = Callback::new(move |()| {
        let target = match delete_target.get_untracked() {
            Some(watch) => watch,
            None => return,
        };
        if delete_busy.get_untracked() {
            return;
        }
        set_delete_busy.set(true);
        set_delete_error.set(None);
        spawn_local(async move {
            match api::delete_watch(client, &target.id).await {
                Ok(()) => {
                    set_rows.try_update(|rows| {
                        list::remove_by_id(rows, &target.id, |w| &w.id);
                    });
                    set_delete_target.try_set(None);
                }
                Err(e) => {
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
            <h2>"Watch"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="list-controls">
                <input
                    type="search"
                    placeholder="Search by caption or author"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=kind_filter
                    on:change=move |ev| set_kind_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All types"</option>
                    <option value="watch">"Watch videos"</option>
                </select>
                <select
                    prop:value=sort
                    on:change=move |ev| set_sort.set(event_target_value(&ev))
                >
                    <option value="created-desc">"Newest first"</option>
                    <option value="created-asc">"Oldest first"</option>
                    <option value="author-asc">"Author (A-Z)"</option>
                    <option value="author-desc">"Author (Z-A)"</option>
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Caption"</th>
                            <th>"Author"</th>
                            <th>"Reactions"</th>
                            <th>"Comments"</th>
                            <th>"Created"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|watch| {
                            let id = watch.id.clone();
                            let row = watch.clone();
                            view! {
                                <tr>
                                    <td class="truncate">{watch.caption.clone().unwrap_or_default()}</td>
                                    <td>{view_model::author_name(watch.author.as_ref())}</td>
                                    <td>{watch.reacts.len()}</td>
                                    <td>{watch.comments.len()}</td>
                                    <td>{view_model::format_date(watch.created_at.as_deref())}</td>
                                    <td class="row-actions">
                                        <A href=format!("/dashboard/watch/{id}")>"View"</A>
                                        <A href=format!("/dashboard/watch/{id}/edit")>"Edit"</A>
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
                    <p class="empty">"No watch videos match the current search."</p>
                </Show>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteConfirmModal
                    title="Delete watch video"
                    message=Signal::derive(move || {
                        let author = delete_target
                            .get()
                            .map(|w| view_model::author_name(w.author.as_ref()))
                            .unwrap_or_default();
                        format!("Delete this video by {author}? This cannot be undone.")
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
pub fn WatchViewPage() -> impl IntoView {
    let client = use_api();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let (watch, set_watch) = signal(None::<Watch>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_watch(client, &id).await {
                Ok(w) => {
                    set_watch.try_set(Some(w));
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load watch video: {e}")));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Watch video"</h2>
                <A href=move || format!("/dashboard/watch/{}/edit", id()) attr:class="btn-primary">
                    "Edit"
                </A>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || watch.get().map(|w| {
                let reacts = w.reacts.len();
                let comments = w.comments.len();
                let has_video = w.video.is_some();
                let video_url = w.video.clone().unwrap_or_default();
                view! {
                    <div class="detail-card">
                        <h3>{view_model::author_name(w.author.as_ref())}</h3>
                        <Show when=move || has_video>
                            <video class="watch-video" controls src=video_url.clone()></video>
                        </Show>
                        <dl>
                            <dt>"Caption"</dt>
                            <dd>{w.caption.clone().unwrap_or_default()}</dd>
                            <dt>"Feeling"</dt>
                            <dd>{w.feeling.clone().unwrap_or_default()}</dd>
                            <dt>"Audience"</dt>
                            <dd>{w.audience.clone().unwrap_or_else(|| "public".to_string())}</dd>
                            <dt>"Reactions"</dt>
                            <dd>{reacts}</dd>
                            <dt>"Comments"</dt>
                            <dd>{comments}</dd>
                            <dt>"Created"</dt>
                            <dd>{view_model::format_datetime(w.created_at.as_deref())}</dd>
                        </dl>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
pub fn WatchEditPage() -> impl IntoView {
    let client = use_api();
    let params = use_params_map();
    // Stored so the submit handler stays Copy for the reactive view tree.
    let navigate = StoredValue::new(use_navigate());
    let id = move || params.read().get("id").unwrap_or_default();

    let draft = RwSignal::new(WatchDraft::default());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let (saved, set_saved) = signal(false);

    Effect::new(move |_| {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_watch(client, &id).await {
                Ok(w) => {
                    draft.try_set(WatchDraft::from_watch(&w));
                    set_loaded.try_set(true);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load watch video: {e}")));
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
            match api::update_watch(client, &id, &body).await {
                Ok(()) => {
                    set_saved.try_set(true);
                    gloo_timers::future::TimeoutFuture::new(1_500).await;
                    let _ = navigate.try_with_value(|nav| {
                        nav(&format!("/dashboard/watch/{id}"), Default::default())
                    });
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
            <h2>"Edit watch video"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || saved.get()>
                <p class="form-success">"Video saved. Redirecting..."</p>
            </Show>
            <Show when=move || loaded.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="edit-form" on:submit=on_submit>
                    <label>"Caption"</label>
                    <input
                        prop:value=move || draft.with(|d| d.caption.clone())
                        on:input=move |ev| draft.update(|d| d.caption = event_target_value(&ev))
                    />
                    <label>"Feeling"</label>
                    <input
                        prop:value=move || draft.with(|d| d.feeling.clone())
                        on:input=move |ev| draft.update(|d| d.feeling = event_target_value(&ev))
                    />
                    <label>"Audience"</label>
                    <select
                        prop:value=move || draft.with(|d| d.audience.clone())
                        on:change=move |ev| draft.update(|d| d.audience = event_target_value(&ev))
                    >
                        <option value="public">"Public"</option>
                        <option value="friends">"Friends"</option>
                        <option value="private">"Private"</option>
                    </select>
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
