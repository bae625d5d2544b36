use crate::{
    api::{ApiError, Stats},
    components::common::BarList,
    pages::dashboard::utils::{status_points, trend_total},
};
use leptos::*;

#[component]
fn ChartCard(title: &'static str, #[prop(optional, into)] caption: Option<String>, points: Vec<(String, i64)>) -> impl IntoView {
    let empty = points.is_empty();
    view! {
        <div class="chart-card bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex justify-between items-center">
                <h3 class="text-base font-semibold text-fg">{title}</h3>
                {caption.map(|c| view! { <span class="text-xs text-fg-muted">{c}</span> })}
            </div>
            {if empty {
                view! { <p class="text-sm text-fg-muted">"No data yet"</p> }.into_view()
            } else {
                view! { <BarList points=Signal::derive(move || points.clone()) /> }.into_view()
            }}
        </div>
    }
}

#[component]
pub fn ChartsSection(stats: Resource<(), Result<Stats, ApiError>>) -> impl IntoView {
    move || {
        stats.get().and_then(Result::ok).map(|data| {
            view! {
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <ChartCard title="Task Distribution" points=status_points(&data) />
                    <ChartCard title="Project Progress" points=data.charts.projects.points() />
                    <ChartCard
                        title="Member Activity"
                        caption=format!("{} Total Actions", trend_total(&data))
                        points=data.charts.trend.points()
                    />
                </div>
            }
        })
    }
}
