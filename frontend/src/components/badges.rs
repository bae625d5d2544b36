use crate::api::{ProjectStatus, TaskPriority, TaskStatus};
use leptos::*;

pub fn task_status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::ToDo => "bg-surface-muted text-fg-muted",
        TaskStatus::InProgress => "bg-status-warning-bg text-status-warning-text",
        TaskStatus::Completed => "bg-status-success-bg text-status-success-text",
    }
}

pub fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "bg-status-info-bg text-status-info-text",
        TaskPriority::Medium => "bg-status-warning-bg text-status-warning-text",
        TaskPriority::High => "bg-status-error-bg text-status-error-text",
    }
}

pub fn project_status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "bg-status-success-bg text-status-success-text",
        ProjectStatus::Completed => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String, class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("badge inline-flex items-center px-2 py-0.5 rounded-full text-xs font-semibold {}", class)>
            {label}
        </span>
    }
}

#[component]
pub fn TaskStatusBadge(status: TaskStatus) -> impl IntoView {
    view! { <Badge label=status.as_str() class=task_status_class(status) /> }
}

#[component]
pub fn PriorityBadge(priority: TaskPriority) -> impl IntoView {
    view! { <Badge label=priority.as_str() class=priority_class(priority) /> }
}

#[component]
pub fn ProjectStatusBadge(status: ProjectStatus) -> impl IntoView {
    view! { <Badge label=status.as_str() class=project_status_class(status) /> }
}
