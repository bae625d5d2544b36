use crate::{
    api::Project,
    components::{
        confirm_dialog::ConfirmDialog, empty_state::EmptyState, error::InlineErrorMessage,
        layout::LoadingSpinner, modal::Modal,
    },
    pages::projects::{
        components::{ProjectCard, ProjectForm},
        utils::StatusFilter,
        view_model::ProjectsViewModel,
    },
    state::auth::use_is_admin,
};
use leptos::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let vm = ProjectsViewModel::new();
    let is_admin = use_is_admin();
    let visible = vm.visible_projects();

    let on_toggle = Callback::new(move |id: String| {
        spawn_local(async move {
            let _ = vm.toggle_status(&id).await;
        });
    });
    let on_delete = Callback::new(move |project: Project| vm.request_delete(project));
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.create().await;
        });
    };

    view! {
        <div class="projects-page space-y-6">
            <header class="flex flex-col md:flex-row justify-between md:items-center gap-4">
                <div>
                    <h2 class="text-2xl font-black text-fg tracking-tight">"Projects"</h2>
                    <p class="text-sm text-fg-muted">"Everything your team is working on"</p>
                </div>
                <div class="flex items-center gap-3">
                    <div class="flex gap-1 bg-surface-muted rounded-xl p-1">
                        {StatusFilter::ALL
                            .into_iter()
                            .map(|filter| view! {
                                <button
                                    type="button"
                                    class=move || if vm.filter.get() == filter {
                                        "px-3 py-1.5 rounded-lg text-xs font-bold bg-surface-elevated text-fg shadow"
                                    } else {
                                        "px-3 py-1.5 rounded-lg text-xs font-bold text-fg-muted"
                                    }
                                    on:click=move |_| vm.filter.set(filter)
                                >
                                    {filter.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    <Show when=move || is_admin.get()>
                        <button
                            type="button"
                            class="px-4 py-2 rounded-xl bg-brand text-white text-sm font-bold"
                            on:click=move |_| vm.open_create()
                        >
                            <i class="fas fa-plus mr-2"></i>
                            "New Project"
                        </button>
                    </Show>
                </div>
            </header>

            {move || {
                if vm.loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if visible.with(Vec::is_empty) {
                    view! { <EmptyState title="No projects found" icon="folder-open" /> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                            <For
                                each=move || visible.get()
                                key=|p| (p.id.clone(), p.status)
                                children=move |project| view! {
                                    <ProjectCard project=project is_admin=is_admin on_toggle=on_toggle on_delete=on_delete />
                                }
                            />
                        </div>
                    }
                    .into_view()
                }
            }}

            <Modal is_open=vm.form_open title="Create New Project" on_close=Callback::new(move |_| vm.close_form())>
                <form class="space-y-4" on:submit=on_create>
                    <ProjectForm form=vm.form team=vm.team />
                    <InlineErrorMessage error=vm.form_error />
                    <div class="mt-6 flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-fg-muted rounded-lg" on:click=move |_| vm.close_form()>"Cancel"</button>
                        <button type="submit" class="px-4 py-2 bg-brand text-white rounded-lg disabled:opacity-50" disabled=move || vm.saving.get()>
                            "Create Project"
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete Project"
                message="Are you sure? This will delete all tasks within the project."
                confirm_label="Yes, Delete"
                destructive=true
                on_confirm=Callback::new(move |_| spawn_local(async move {
                    let _ = vm.confirm_delete().await;
                }))
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
