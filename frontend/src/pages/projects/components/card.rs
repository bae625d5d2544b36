use crate::{
    api::{Project, ProjectStatus},
    components::{badges::ProjectStatusBadge, common::Avatar},
    utils::time::format_date,
};
use leptos::*;

const MAX_AVATARS: usize = 4;

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] is_admin: Signal<bool>,
    on_toggle: Callback<String>,
    on_delete: Callback<Project>,
) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let toggle_id = project.id.clone();
    let delete_target = project.clone();
    let toggle_label = match project.status {
        ProjectStatus::Active => "Mark Completed",
        ProjectStatus::Completed => "Reopen",
    };
    let dates = match (&project.start_date, &project.end_date) {
        (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
        (Some(start), None) => format!("From {}", format_date(start)),
        _ => "No dates set".to_string(),
    };
    let extra_members = project.members.len().saturating_sub(MAX_AVATARS);

    view! {
        <div class="project-card bg-surface-elevated rounded-2xl border border-border p-6 flex flex-col gap-4">
            <div class="flex justify-between items-start gap-2">
                <a href=href class="text-lg font-black text-fg hover:text-brand">{project.title.clone()}</a>
                <ProjectStatusBadge status=project.status />
            </div>
            <p class="text-sm text-fg-muted line-clamp-2">
                {project.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No description".to_string())}
            </p>
            <p class="text-xs text-fg-muted"><i class="fas fa-calendar mr-1"></i>{dates}</p>
            <div class="flex items-center -space-x-2">
                {project
                    .members
                    .iter()
                    .take(MAX_AVATARS)
                    .map(|member| view! { <Avatar name=member.display_name() image_url=member.avatar_url.clone().unwrap_or_default() small=true /> })
                    .collect_view()}
                {(extra_members > 0).then(|| view! { <span class="pl-3 text-xs text-fg-muted">{format!("+{}", extra_members)}</span> })}
            </div>
            <Show when=move || is_admin.get()>
                {
                    let toggle_id = toggle_id.clone();
                    let delete_target = delete_target.clone();
                    view! {
                        <div class="admin-actions flex justify-end gap-2 pt-2 border-t border-border">
                            <button type="button" class="text-xs font-semibold text-fg-muted hover:text-brand" on:click=move |_| on_toggle.call(toggle_id.clone())>
                                {toggle_label}
                            </button>
                            <button type="button" class="text-xs font-semibold text-status-error-text" on:click=move |_| on_delete.call(delete_target.clone())>
                                "Delete"
                            </button>
                        </div>
                    }
                }
            </Show>
        </div>
    }
}
