//! Post Screens
//!
//! List with search/filter/sort and delete, detail view, and the edit form
//! with the image replacement flow: a staged file is uploaded first, and the
//! save is abandoned if that upload fails.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::api::use_api;
use crate::components::{DeleteConfirmModal, ImagePicker};
use crate::list;
use crate::models::{Post, PostDraft};
use crate::view_model;

fn post_summary(post: &Post) -> String {
    post.caption
        .clone()
        .or_else(|| post.content.clone())
        .or_else(|| post.text.clone())
        .unwrap_or_default()
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let client = use_api();

    let (rows, set_rows) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let (kind_filter, set_kind_filter) = signal("all".to_string());
    let (sort, set_sort) = signal("created-desc".to_string());

    let (delete_target, set_delete_target) = signal(None::<Post>);
    let (delete_busy, set_delete_busy) = signal(false);
    let (delete_error, set_delete_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_posts(client).await {
                Ok(posts) => {
                    set_rows.try_set(posts);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load posts: {e}")));
                }
            }
            set_loading.try_set(false);
        });
    });

    let visible = move || {
        let term = search.get();
        let facet = kind_filter.get();
        let (field, order) = list::parse_sort_option(&sort.get());
        let mut posts: Vec<Post> = rows
            .get()
            .into_iter()
            .filter(|p| {
                list::matches_search(
                    &term,
                    &[&post_summary(p), &view_model::author_name(p.author.as_ref())],
                )
            })
            .filter(|p| list::matches_facet(&facet, &view_model::post_kind(p)))
            .collect();
        match field.as_str() {
            "author" => list::sort_rows(
                &mut posts,
                order,
                |p| view_model::author_name(p.author.as_ref()).to_lowercase(),
                |p| p.id.clone(),
            ),
            _ => list::sort_rows(
                &mut posts,
                order,
                |p| view_model::timestamp_key(p.created_at.as_deref()),
                |p| p.id.clone(),
            ),
        }
        posts
    };

    let confirm_delete = Callback::new(move |()| {
        let target = match delete_target.get_untracked() {
            Some(post) => post,
            None => return,
        };
        if delete_busy.get_untracked() {
            return;
        }
        set_delete_busy.set(true);
        set_delete_error.set(None);
        spawn_local(async move {
            match api::delete_post(client, &target.id).await {
                Ok(()) => {
                    set_rows.try_update(|rows| {
                        list::remove_by_id(rows, &target.id, |p| &p.id);
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
            <h2>"Posts"</h2>
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
                    <option value="text">"Text"</option>
                    <option value="image">"Image"</option>
                    <option value="video">"Video"</option>
                    <option value="link">"Link"</option>
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
                            <th>"Type"</th>
                            <th>"Reactions"</th>
                            <th>"Comments"</th>
                            <th>"Created"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|post| {
                            let id = post.id.clone();
                            let row = post.clone();
                            view! {
                                <tr>
                                    <td class="truncate">{post_summary(&post)}</td>
                                    <td>{view_model::author_name(post.author.as_ref())}</td>
                                    <td>{view_model::post_kind(&post)}</td>
                                    <td>{post.reacts.len()}</td>
                                    <td>{post.comments.len()}</td>
                                    <td>{view_model::format_date(post.created_at.as_deref())}</td>
                                    <td class="row-actions">
                                        <A href=format!("/dashboard/posts/{id}")>"View"</A>
                                        <A href=format!("/dashboard/posts/{id}/edit")>"Edit"</A>
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
                    <p class="empty">"No posts match the current filters."</p>
                </Show>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteConfirmModal
                    title="Delete post"
                    message=Signal::derive(move || {
                        let author = delete_target
                            .get()
                            .map(|p| view_model::author_name(p.author.as_ref()))
                            .unwrap_or_default();
                        format!("Delete this post by {author}? This cannot be undone.")
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
pub fn PostViewPage() -> impl IntoView {
    let client = use_api();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let (post, set_post) = signal(None::<Post>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_post(client, &id).await {
                Ok(p) => {
                    set_post.try_set(Some(p));
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load post: {e}")));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Post"</h2>
                <A href=move || format!("/dashboard/posts/{}/edit", id()) attr:class="btn-primary">
                    "Edit"
                </A>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || post.get().map(|p| {
                let reacts = p.reacts.len();
                let comments = p.comments.len();
                let has_photo = p.photos.is_some();
                let photo_url = p.photos.clone().unwrap_or_default();
                view! {
                    <div class="detail-card">
                        <h3>{view_model::author_name(p.author.as_ref())}</h3>
                        <Show when=move || has_photo>
                            <img class="post-image" src=photo_url.clone()/>
                        </Show>
                        <dl>
                            <dt>"Caption"</dt>
                            <dd>{p.caption.clone().unwrap_or_default()}</dd>
                            <dt>"Content"</dt>
                            <dd>{p.content.clone().unwrap_or_default()}</dd>
                            <dt>"Type"</dt>
                            <dd>{view_model::post_kind(&p)}</dd>
                            <dt>"Feelings"</dt>
                            <dd>{p.feelings.clone().unwrap_or_default()}</dd>
                            <dt>"Location"</dt>
                            <dd>{p.location.clone().unwrap_or_default()}</dd>
                            <dt>"Audience"</dt>
                            <dd>{p.audience.clone().unwrap_or_else(|| "public".to_string())}</dd>
                            <dt>"Reactions"</dt>
                            <dd>{reacts}</dd>
                            <dt>"Comments"</dt>
                            <dd>{comments}</dd>
                            <dt>"Created"</dt>
                            <dd>{view_model::format_datetime(p.created_at.as_deref())}</dd>
                        </dl>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
pub fn PostEditPage() -> impl IntoView {
    let client = use_api();
    let params = use_params_map();
    // Stored so the submit handler stays Copy for the reactive view tree.
    let navigate = StoredValue::new(use_navigate());
    let id = move || params.read().get("id").unwrap_or_default();

    let draft = RwSignal::new(PostDraft::default());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let (saved, set_saved) = signal(false);

    // Staged replacement image. The preview starts as the current hosted URL.
    let selected_image = RwSignal::new(None::<web_sys::File>);
    let preview = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_post(client, &id).await {
                Ok(p) => {
                    draft.try_set(PostDraft::from_post(&p));
                    preview.try_set(p.photos.clone());
                    set_loaded.try_set(true);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load post: {e}")));
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
            let mut body = draft.get_untracked();

            // Upload the staged image first; a failed upload aborts the save
            // so a half-updated post is never written.
            if let Some(file) = selected_image.get_untracked() {
                match client.upload(&file).await {
                    Ok(url) => body.photos = Some(url),
                    Err(e) => {
                        set_error.try_set(Some(format!("Image upload failed: {e}")));
                        set_busy.try_set(false);
                        return;
                    }
                }
            }

            match api::update_post(client, &id, &body).await {
                Ok(()) => {
                    set_saved.try_set(true);
                    gloo_timers::future::TimeoutFuture::new(1_500).await;
                    let _ = navigate.try_with_value(|nav| {
                        nav(&format!("/dashboard/posts/{id}"), Default::default())
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
            <h2>"Edit post"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || saved.get()>
                <p class="form-success">"Post saved. Redirecting..."</p>
            </Show>
            <Show when=move || loaded.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="edit-form" on:submit=on_submit>
                    <label>"Caption"</label>
                    <input
                        prop:value=move || draft.with(|d| d.caption.clone())
                        on:input=move |ev| draft.update(|d| d.caption = event_target_value(&ev))
                    />
                    <label>"Content"</label>
                    <textarea
                        prop:value=move || draft.with(|d| d.content.clone())
                        on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                    ></textarea>
                    <label>"Text"</label>
                    <textarea
                        prop:value=move || draft.with(|d| d.text.clone())
                        on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                    ></textarea>
                    <label>"Feelings"</label>
                    <input
                        prop:value=move || draft.with(|d| d.feelings.clone())
                        on:input=move |ev| draft.update(|d| d.feelings = event_target_value(&ev))
                    />
                    <label>"Location"</label>
                    <input
                        prop:value=move || draft.with(|d| d.location.clone())
                        on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
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
                    <ImagePicker selected=selected_image preview=preview label="Photo"/>
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
            </Show>
        </div>
    }
}
