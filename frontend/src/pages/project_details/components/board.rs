use crate::{
    api::{Task, TaskStatus},
    components::{
        badges::{task_status_class, PriorityBadge},
        common::Avatar,
    },
    pages::{project_details::utils::move_label, tasks::utils::deadline_label},
    utils::time::today_local,
};
use leptos::*;

#[component]
fn TaskCard(
    task: Task,
    on_move: Callback<String>,
    on_view: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let id = task.id.clone();
    let deadline = deadline_label(task.deadline.as_deref(), today_local())
        .filter(|_| task.status != TaskStatus::Completed);
    let assignee = task.assignee_name().map(str::to_string);
    let (view_target, edit_target, target) = (task.clone(), task.clone(), task.clone());
    view! {
        <div class="board-card bg-surface-elevated rounded-xl border border-border p-4 space-y-3">
            <div class="flex justify-between items-start gap-2">
                <button
                    type="button"
                    class="text-sm font-semibold text-fg text-left hover:text-brand"
                    on:click=move |_| on_view.call(view_target.clone())
                >
                    {task.title.clone()}
                </button>
                <PriorityBadge priority=task.priority />
            </div>
            {task.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                <p class="text-xs text-fg-muted line-clamp-2">{d}</p>
            })}
            <div class="flex items-center justify-between">
                {match assignee {
                    Some(name) => view! { <Avatar name=name small=true /> }.into_view(),
                    None => view! { <span class="text-xs text-fg-muted">"Unassigned"</span> }.into_view(),
                }}
                {deadline.map(|label| view! { <span class=format!("text-xs {}", label.class())>{label.text()}</span> })}
            </div>
            <div class="flex justify-between pt-2 border-t border-border">
                <button type="button" class="text-xs font-semibold text-brand" on:click=move |_| on_move.call(id.clone())>
                    {move_label(task.status)}
                </button>
                <div class="flex gap-3">
                    <button type="button" class="text-xs text-fg-muted hover:text-brand" aria-label="Edit task" on:click=move |_| on_edit.call(edit_target.clone())>
                        <i class="fas fa-pen"></i>
                    </button>
                    <button type="button" class="text-xs text-fg-muted hover:text-status-error-text" aria-label="Delete task" on:click=move |_| on_delete.call(target.clone())>
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn BoardColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    on_move: Callback<String>,
    on_view: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let count = tasks.len();
    view! {
        <section class="board-column bg-surface-muted rounded-2xl p-4 space-y-3 min-h-[12rem]">
            <header class="flex items-center justify-between">
                <span class=format!("px-2 py-0.5 rounded-full text-xs font-semibold {}", task_status_class(status))>
                    {status.as_str()}
                </span>
                <span class="text-xs font-bold text-fg-muted">{count}</span>
            </header>
            {if tasks.is_empty() {
                view! { <p class="text-xs text-fg-muted text-center py-6">"No tasks"</p> }.into_view()
            } else {
                tasks
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task on_move=on_move on_view=on_view on_edit=on_edit on_delete=on_delete /> })
                    .collect_view()
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn column_shows_cards_and_next_step() {
        let html = render_to_string(move || {
            let tasks = vec![Task {
                id: "t-1".into(),
                title: "Wireframes".into(),
                status: TaskStatus::InProgress,
                ..Task::default()
            }];
            view! {
                <BoardColumn
                    status=TaskStatus::InProgress
                    tasks=tasks
                    on_move=Callback::new(|_| {})
                    on_view=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Wireframes"));
        assert!(html.contains("In Progress"));
        assert!(html.contains("Complete"));
        assert!(html.contains("Unassigned"));
        assert!(html.contains("Edit task"));
    }

    #[test]
    fn empty_column_says_so() {
        let html = render_to_string(move || view! {
            <BoardColumn status=TaskStatus::ToDo tasks=Vec::new() on_move=Callback::new(|_| {}) on_view=Callback::new(|_| {}) on_edit=Callback::new(|_| {}) on_delete=Callback::new(|_| {}) />
        });
        assert!(html.contains("No tasks"));
    }
}
