//! Dashboard Overview
//!
//! Platform totals and the recent-activity feed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::use_api;
use crate::models::StatsResponse;
use crate::view_model;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_api();

    let (stats, set_stats) = signal(None::<StatsResponse>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_stats(client).await {
                Ok(res) => {
                    set_stats.try_set(Some(res));
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Could not load stats: {e}")));
                }
            }
            set_loading.try_set(false);
        });
    });

    let totals = move || stats.get().map(|s| s.totals).unwrap_or_default();

    view! {
        <div class="page">
            <h2>"Dashboard"</h2>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-value">{move || totals().users}</span>
                        <span class="stat-label">"Users"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || totals().profiles}</span>
                        <span class="stat-label">"Profiles"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || totals().active_profiles}</span>
                        <span class="stat-label">"Active profiles"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || totals().posts}</span>
                        <span class="stat-label">"Posts"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || totals().watches}</span>
                        <span class="stat-label">"Watch videos"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || totals().comments}</span>
                        <span class="stat-label">"Comments"</span>
                    </div>
                </div>
                <section class="recent-activity">
                    <h3>"Recent activity"</h3>
                    <ul>
                        {move || {
                            let entries = stats.get().map(|s| s.recent_activities).unwrap_or_default();
                            if entries.is_empty() {
                                view! { <li class="empty">"No recent activity"</li> }.into_any()
                            } else {
                                entries
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li>
                                                <span>{entry.message.unwrap_or_default()}</span>
                                                <span class="activity-time">
                                                    {view_model::format_datetime(entry.at.as_deref())}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
