use crate::api::TaskStatus;
use leptos::*;

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-xl text-xs font-black uppercase tracking-widest bg-brand text-white"
    } else {
        "px-4 py-2 rounded-xl text-xs font-black uppercase tracking-widest bg-surface-muted text-fg-muted hover:text-fg"
    }
}

#[component]
pub fn TaskFilters(search: RwSignal<String>, status: RwSignal<Option<TaskStatus>>) -> impl IntoView {
    let options: Vec<(&'static str, Option<TaskStatus>)> = std::iter::once(("All", None))
        .chain(TaskStatus::ALL.into_iter().map(|s| (s.as_str(), Some(s))))
        .collect();
    view! {
        <div class="task-filters flex flex-col md:flex-row gap-4 md:items-center md:justify-between">
            <input
                type="search"
                class="w-full md:w-80 px-4 py-2 rounded-xl border border-border bg-form-control-bg text-sm"
                placeholder="Search tasks or projects..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="flex gap-2 overflow-x-auto">
                {options
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <button
                                type="button"
                                class=move || chip_class(status.get() == value)
                                on:click=move |_| status.set(value)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
