use crate::{
    api::{Task, TaskStatus},
    components::{
        badges::{task_status_class, PriorityBadge},
        common::Avatar,
    },
    pages::tasks::utils::deadline_label,
    utils::time::{format_date, today_local},
};
use leptos::*;

#[component]
pub fn TaskTable(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    on_cycle: Callback<String>,
    on_view: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let today = today_local();
    view! {
        <div class="overflow-x-auto">
            <table class="task-table min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Task"</th>
                        <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Assignee"</th>
                        <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Status"</th>
                        <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Priority"</th>
                        <th class="px-4 py-3 text-left text-xs font-black uppercase tracking-widest text-fg-muted">"Deadline"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id.clone(), task.status, task.title.clone())
                        children=move |task| {
                            let id = task.id.clone();
                            let (deadline_text, deadline_class) = match (task.status, deadline_label(task.deadline.as_deref(), today)) {
                                (_, None) => ("-".to_string(), "text-fg-muted"),
                                (TaskStatus::Completed, Some(_)) => (
                                    task.deadline.as_deref().map(format_date).unwrap_or_default(),
                                    "text-fg-muted line-through",
                                ),
                                (_, Some(label)) => (label.text(), label.class()),
                            };
                            let assignee = task.assignee_name().map(str::to_string);
                            let view_task = task.clone();
                            let edit_task = task.clone();
                            let delete_task = task.clone();
                            view! {
                                <tr class="task-row">
                                    <td class="px-4 py-3">
                                        <button
                                            type="button"
                                            class="text-sm font-semibold text-fg text-left hover:text-brand"
                                            on:click=move |_| on_view.call(view_task.clone())
                                        >
                                            {task.title.clone()}
                                        </button>
                                        <p class="text-xs text-fg-muted">{task.project_title().unwrap_or("Personal").to_string()}</p>
                                    </td>
                                    <td class="px-4 py-3">
                                        {match assignee {
                                            Some(name) => view! {
                                                <div class="flex items-center gap-2">
                                                    <Avatar name=name.clone() small=true />
                                                    <span class="text-sm">{name}</span>
                                                </div>
                                            }.into_view(),
                                            None => view! { <span class="text-sm text-fg-muted">"Unassigned"</span> }.into_view(),
                                        }}
                                    </td>
                                    <td class="px-4 py-3">
                                        <button
                                            type="button"
                                            title="Change status"
                                            class=format!("status-toggle px-2 py-0.5 rounded-full text-xs font-semibold {}", task_status_class(task.status))
                                            on:click=move |_| on_cycle.call(id.clone())
                                        >
                                            {task.status.as_str()}
                                        </button>
                                    </td>
                                    <td class="px-4 py-3"><PriorityBadge priority=task.priority /></td>
                                    <td class=format!("px-4 py-3 text-sm {}", deadline_class)>{deadline_text}</td>
                                    <td class="px-4 py-3 text-right space-x-2">
                                        <button type="button" class="text-fg-muted hover:text-brand" aria-label="Edit task" on:click=move |_| on_edit.call(edit_task.clone())>
                                            <i class="fas fa-pen"></i>
                                        </button>
                                        <button type="button" class="text-fg-muted hover:text-status-error-text" aria-label="Delete task" on:click=move |_| on_delete.call(delete_task.clone())>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
