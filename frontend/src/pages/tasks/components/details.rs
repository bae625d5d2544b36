use crate::{
    api::Task,
    components::{
        badges::{task_status_class, PriorityBadge},
        modal::Modal,
    },
    utils::time::format_date,
};
use leptos::*;

/// Label/value pairs shown under the description.
pub fn detail_fields(task: &Task) -> Vec<(&'static str, String)> {
    vec![
        ("Project", task.project_title().unwrap_or("Personal").to_string()),
        ("Assignee", task.assignee_name().unwrap_or("Unassigned").to_string()),
        (
            "Deadline",
            task.deadline
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(format_date)
                .unwrap_or_else(|| "None".to_string()),
        ),
    ]
}

/// Read-only body of the "Task Details" popup.
#[component]
pub fn TaskDetails(task: Task, on_close: Callback<()>) -> impl IntoView {
    let description = task
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());
    let fields = detail_fields(&task);
    view! {
        <div class="task-details space-y-5">
            <div class="flex justify-between items-start gap-3">
                <h4 class="text-lg font-bold text-fg">{task.title.clone()}</h4>
                <PriorityBadge priority=task.priority />
            </div>
            <p class="text-sm text-fg-muted whitespace-pre-wrap">{description}</p>
            <dl class="grid grid-cols-2 gap-4 text-sm">
                <div>
                    <dt class="text-xs font-black uppercase tracking-widest text-fg-muted">"Status"</dt>
                    <dd class=format!("inline-block mt-1 px-2 py-0.5 rounded-full text-xs font-semibold {}", task_status_class(task.status))>
                        {task.status.as_str()}
                    </dd>
                </div>
                {fields
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div>
                            <dt class="text-xs font-black uppercase tracking-widest text-fg-muted">{label}</dt>
                            <dd class="mt-1 font-semibold text-fg">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <div class="flex justify-end">
                <button type="button" class="px-6 py-2 font-bold text-fg-muted rounded-xl" on:click=move |_| on_close.call(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}

/// "Task Details" popup, open while `viewing` holds a task.
#[component]
pub fn TaskDetailsModal(viewing: RwSignal<Option<Task>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal is_open=Signal::derive(move || viewing.with(Option::is_some)) title="Task Details" on_close=on_close>
            {move || viewing.get().map(|task| view! { <TaskDetails task=task on_close=on_close /> })}
        </Modal>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{TaskPriority, TaskStatus};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn details_render_description_fallback_and_status() {
        let html = render_to_string(move || {
            let task = Task {
                id: "t-1".into(),
                title: "Wireframes".into(),
                status: TaskStatus::InProgress,
                priority: TaskPriority::High,
                ..Task::default()
            };
            view! { <TaskDetails task=task on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Wireframes"));
        assert!(html.contains("No description provided."));
        assert!(html.contains("In Progress"));
        assert!(html.contains("Personal"));
        assert!(html.contains("Unassigned"));
        assert!(html.contains("Close"));
    }

    #[test]
    fn details_popup_shows_the_selected_task() {
        let html = render_to_string(move || {
            let viewing = create_rw_signal(Some(Task {
                id: "t-9".into(),
                title: "Plan launch".into(),
                description: Some("Book the venue".into()),
                ..Task::default()
            }));
            view! { <TaskDetailsModal viewing=viewing on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Task Details"));
        assert!(html.contains("Plan launch"));
        assert!(html.contains("Book the venue"));
    }

    #[test]
    fn details_popup_stays_closed_without_a_task() {
        let html = render_to_string(move || {
            let viewing = create_rw_signal(None::<Task>);
            view! { <TaskDetailsModal viewing=viewing on_close=Callback::new(|_| {}) /> }
        });
        assert!(!html.contains("Task Details"));
    }
}
