//! Profile Reports Screen
//!
//! Moderation queue for reported profiles. Status changes are written back
//! in place; the row only reflects the new status once the backend accepts
//! it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::api::use_api;
use crate::components::StatusBadge;
use crate::list;
use crate::models::Report;
use crate::view_model;

const STATUSES: &[&str] = &["open", "reviewed", "dismissed"];

fn report_status(report: &Report) -> String {
    report.status.clone().unwrap_or_else(|| "open".to_string())
}

#[component]
pub fn ProfileReportsPage() -> impl IntoView {
    let client = use_api();

    let (rows, set_rows) = signal(Vec::<Report>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (status_filter, set_status_filter) = signal("all".to_string());
    let (sort, set_sort) = signal("created-desc".to_string());
    let (updating, set_updating) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_profile_reports(client).await {
                Ok(reports) => {
                    set_rows.try_set(reports);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load reports: {e}")));
                }
            }
            set_loading.try_set(false);
        });
    });

    let visible = move || {
        let facet = status_filter.get();
        let (_, order) = list::parse_sort_option(&sort.get());
        let mut reports: Vec<Report> = rows
            .get()
            .into_iter()
            .filter(|r| list::matches_facet(&facet, &report_status(r)))
            .collect();
        list::sort_rows(
            &mut reports,
            order,
            |r| view_model::timestamp_key(r.created_at.as_deref()),
            |r| r.id.clone(),
        );
        reports
    };

    let change_status = move |report_id: String, status: String| {
        if updating.get_untracked().is_some() {
            return;
        }
        set_updating.set(Some(report_id.clone()));
        set_error.set(None);
        spawn_local(async move {
            match api::update_report_status(client, &report_id, &status).await {
                Ok(()) => {
                    set_rows.try_update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == report_id) {
                            row.status = Some(status);
                        }
                    });
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Status update failed: {e}")));
                }
            }
            set_updating.try_set(None);
        });
    };

    view! {
        <div class="page">
            <h2>"Profile reports"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="list-controls">
                <select
                    prop:value=status_filter
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All statuses"</option>
                    <option value="open">"Open"</option>
                    <option value="reviewed">"Reviewed"</option>
                    <option value="dismissed">"Dismissed"</option>
                </select>
                <select
                    prop:value=sort
                    on:change=move |ev| set_sort.set(event_target_value(&ev))
                >
                    <option value="created-desc">"Newest first"</option>
                    <option value="created-asc">"Oldest first"</option>
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Reported profile"</th>
                            <th>"Reported by"</th>
                            <th>"Reason"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                            <th>"Set status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|report| {
                            let report_id = report.id.clone();
                            let current = report_status(&report);
                            let busy_id = report.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        {match report.reported_profile.clone() {
                                            Some(profile) => {
                                                let name = view_model::profile_name(&profile);
                                                view! {
                                                    <A href=format!("/dashboard/profiles/{}", profile.id)>
                                                        {name}
                                                    </A>
                                                }
                                                .into_any()
                                            }
                                            None => view! {
                                                <span>{view_model::UNKNOWN_USER}</span>
                                            }
                                            .into_any(),
                                        }}
                                    </td>
                                    <td>
                                        {report.reported_by.as_ref()
                                            .map(view_model::profile_name)
                                            .unwrap_or_else(|| view_model::UNKNOWN_USER.to_string())}
                                    </td>
                                    <td class="truncate">{report.reason.clone().unwrap_or_default()}</td>
                                    <td><StatusBadge status=current.clone()/></td>
                                    <td>{view_model::format_date(report.created_at.as_deref())}</td>
                                    <td>
                                        <select
                                            prop:value=current
                                            disabled=move || updating.get().as_deref() == Some(busy_id.as_str())
                                            on:change=move |ev| {
                                                change_status(report_id.clone(), event_target_value(&ev));
                                            }
                                        >
                                            {STATUSES.iter().map(|s| view! {
                                                <option value=*s>{*s}</option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || visible().is_empty()>
                    <p class="empty">"No reports match the current filter."</p>
                </Show>
            </Show>
        </div>
    }
}
