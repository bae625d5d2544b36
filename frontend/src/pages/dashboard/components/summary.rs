use crate::{
    api::{ApiError, Stats},
    components::{common::StatCard, error::LoadError, layout::LoadingSpinner},
    pages::dashboard::utils::stat_cards,
};
use leptos::*;

#[component]
pub fn SummarySection(
    stats: Resource<(), Result<Stats, ApiError>>,
    #[prop(into)] is_admin: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="summary-section">
            {move || match stats.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(_)) => view! {
                    <LoadError message="Failed to load dashboard stats" on_retry=Callback::new(move |_| stats.refetch()) />
                }
                .into_view(),
                Some(Ok(data)) => view! {
                    <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        {stat_cards(&data, is_admin.get())
                            .into_iter()
                            .map(|card| {
                                let value = card.value.to_string();
                                view! { <StatCard label=card.label value=Signal::derive(move || value.clone()) /> }
                            })
                            .collect_view()}
                    </dl>
                }
                .into_view(),
            }}
        </div>
    }
}
