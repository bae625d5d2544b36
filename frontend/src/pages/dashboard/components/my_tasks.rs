use crate::{
    api::{ApiError, Task},
    components::{
        badges::{PriorityBadge, TaskStatusBadge},
        empty_state::EmptyState,
        error::LoadError,
        layout::LoadingSpinner,
    },
    pages::tasks::utils::deadline_label,
    utils::time::today_local,
};
use leptos::*;

#[component]
pub fn MyTasksSection(tasks: Resource<(), Result<Vec<Task>, ApiError>>) -> impl IntoView {
    view! {
        <div class="my-tasks bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex justify-between items-center">
                <h3 class="text-base font-semibold text-fg">"My Tasks"</h3>
                <a href="/tasks" class="text-sm text-brand font-semibold">"View all"</a>
            </div>
            {move || match tasks.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <LoadError message=err.error /> }.into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <EmptyState title="Nothing assigned to you" icon="clipboard-check" />
                }
                .into_view(),
                Some(Ok(list)) => {
                    let today = today_local();
                    view! {
                        <ul class="divide-y divide-border">
                            {list
                                .into_iter()
                                .map(|task| {
                                    let due = deadline_label(task.deadline.as_deref(), today);
                                    view! {
                                        <li class="py-3 flex items-center justify-between gap-3">
                                            <div class="min-w-0">
                                                <p class="text-sm font-medium text-fg truncate">{task.title.clone()}</p>
                                                <p class="text-xs text-fg-muted">
                                                    {task.project_title().unwrap_or("Personal").to_string()}
                                                    {due.map(|d| format!(" · {}", d.text()))}
                                                </p>
                                            </div>
                                            <div class="flex gap-2 shrink-0">
                                                <PriorityBadge priority=task.priority />
                                                <TaskStatusBadge status=task.status />
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
