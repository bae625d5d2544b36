use crate::{
    api::Task,
    components::{
        badges::ProjectStatusBadge, common::Avatar, confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage, layout::LoadingSpinner, modal::Modal,
    },
    pages::{
        project_details::{components::BoardColumn, utils::board_columns, view_model::ProjectDetailsViewModel},
        tasks::components::{TaskDetailsModal, TaskFormFields},
    },
    state::auth::use_is_admin,
    utils::time::format_date,
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    // Remount when navigating between projects.
    move || view! { <ProjectDetailsPanel project_id=project_id() /> }
}

#[component]
pub fn ProjectDetailsPanel(#[prop(into)] project_id: String) -> impl IntoView {
    let vm = ProjectDetailsViewModel::new(project_id);
    let is_admin = use_is_admin();
    let members = vm.members();
    let addable = vm.addable_members();

    let on_move = Callback::new(move |id: String| {
        spawn_local(async move {
            let _ = vm.move_task(&id).await;
        });
    });
    let on_view = Callback::new(move |task: Task| vm.viewing.set(Some(task)));
    let on_edit = Callback::new(move |task: Task| vm.open_edit_task(&task));
    let on_delete = Callback::new(move |task: Task| vm.pending_delete.set(Some(task)));
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.save_task().await;
        });
    };
    let form_title = Signal::derive(move || {
        let label = if vm.editing.with(Option::is_some) { "Edit Task" } else { "Add Task" };
        label.to_string()
    });
    let on_add_member = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.add_member().await;
        });
    };

    let header = move || {
        vm.project.get().map(|project| {
            let dates = match (&project.start_date, &project.end_date) {
                (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
                (Some(start), None) => format!("From {}", format_date(start)),
                _ => "No dates set".to_string(),
            };
            view! {
                <header class="project-header bg-surface-elevated rounded-2xl border border-border p-6 space-y-4">
                    <div class="flex flex-col md:flex-row justify-between md:items-center gap-4">
                        <div>
                            <a href="/projects" class="text-xs font-semibold text-fg-muted hover:text-brand">
                                <i class="fas fa-arrow-left mr-1"></i>"Projects"
                            </a>
                            <h2 class="text-2xl font-black text-fg tracking-tight">{project.title.clone()}</h2>
                            <p class="text-sm text-fg-muted">
                                {project.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No description".to_string())}
                            </p>
                        </div>
                        <div class="flex items-center gap-3">
                            <ProjectStatusBadge status=project.status />
                            <span class="text-xs text-fg-muted"><i class="fas fa-calendar mr-1"></i>{dates}</span>
                        </div>
                    </div>
                    <div class="flex flex-wrap items-center gap-3">
                        <div class="flex items-center -space-x-2">
                            {project
                                .members
                                .iter()
                                .map(|m| view! { <Avatar name=m.display_name() image_url=m.avatar_url.clone().unwrap_or_default() small=true /> })
                                .collect_view()}
                        </div>
                        <Show when=move || is_admin.get()>
                            <button type="button" class="text-xs font-semibold text-brand" on:click=move |_| vm.member_form_open.set(true)>
                                <i class="fas fa-user-plus mr-1"></i>"Add Member"
                            </button>
                        </Show>
                        <button
                            type="button"
                            class="ml-auto px-4 py-2 rounded-xl bg-brand text-white text-sm font-bold"
                            on:click=move |_| vm.open_task_form()
                        >
                            <i class="fas fa-plus mr-2"></i>"Add Task"
                        </button>
                    </div>
                </header>
            }
        })
    };

    view! {
        <div class="project-details-page space-y-6">
            {move || {
                if vm.loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if vm.project.with(Option::is_none) {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-lg font-bold text-fg">"Project not found"</p>
                            <a href="/projects" class="text-sm text-brand">"Back to projects"</a>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        {header}
                        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                            {move || vm.tasks.with(|tasks| board_columns(tasks))
                                .into_iter()
                                .map(|(status, tasks)| view! {
                                    <BoardColumn status=status tasks=tasks on_move=on_move on_view=on_view on_edit=on_edit on_delete=on_delete />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}

            <Modal is_open=vm.task_form_open title=form_title on_close=Callback::new(move |_| vm.close_task_form())>
                <form class="p-6 space-y-4" on:submit=on_save>
                    <TaskFormFields form=vm.task_form members=members />
                    <InlineErrorMessage error=vm.task_form_error />
                    <div class="flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-fg-muted rounded-lg" on:click=move |_| vm.close_task_form()>"Cancel"</button>
                        <button type="submit" class="px-4 py-2 bg-brand text-white rounded-lg">
                            {move || if vm.editing.with(Option::is_some) { "Save Changes" } else { "Create Task" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <Modal is_open=vm.member_form_open title="Add Member" on_close=Callback::new(move |_| vm.member_form_open.set(false))>
                <form class="p-6 space-y-4" on:submit=on_add_member>
                    <select
                        class="w-full px-4 py-2 rounded-xl border border-border bg-form-control-bg text-sm"
                        prop:value=move || vm.selected_member.get()
                        on:change=move |ev| vm.selected_member.set(event_target_value(&ev))
                    >
                        <option value="">"Select Member"</option>
                        {move || addable.get().into_iter().map(|u| view! {
                            <option value=u.id.clone()>{u.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <div class="flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-fg-muted rounded-lg" on:click=move |_| vm.member_form_open.set(false)>"Cancel"</button>
                        <button
                            type="submit"
                            class="px-4 py-2 bg-brand text-white rounded-lg disabled:opacity-50"
                            disabled=move || vm.selected_member.with(String::is_empty)
                        >
                            "Add"
                        </button>
                    </div>
                </form>
            </Modal>

            <TaskDetailsModal viewing=vm.viewing on_close=Callback::new(move |_| vm.viewing.set(None)) />

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete Task"
                message="Are you sure you want to delete this task?"
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| spawn_local(async move {
                    let _ = vm.confirm_delete().await;
                }))
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_starts_with_spinner() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <ProjectDetailsPanel project_id="p-1" /> }
        });
        assert!(html.contains("project-details-page"));
        assert!(html.contains("animate-spin"));
    }
}
