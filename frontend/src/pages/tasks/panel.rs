use crate::{
    api::Task,
    components::{
        confirm_dialog::ConfirmDialog, empty_state::EmptyState, error::InlineErrorMessage,
        layout::LoadingSpinner, modal::Modal,
    },
    pages::tasks::{
        components::{TaskDetailsModal, TaskFilters, TaskFormFields, TaskTable},
        view_model::TasksViewModel,
    },
};
use leptos::*;

#[component]
pub fn TasksPage() -> impl IntoView {
    let vm = TasksViewModel::new();
    let visible = vm.visible_tasks();

    let on_cycle = Callback::new(move |task_id: String| {
        spawn_local(async move {
            let _ = vm.cycle_status(&task_id).await;
        });
    });
    let on_view = Callback::new(move |task: Task| vm.open_details(task));
    let on_edit = Callback::new(move |task: Task| vm.open_edit(&task));
    let on_delete = Callback::new(move |task: Task| vm.request_delete(task));
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.save().await;
        });
    };
    let modal_title = Signal::derive(move || {
        if vm.editing.with(Option::is_some) {
            "Edit Task".to_string()
        } else {
            "Add New Task".to_string()
        }
    });
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|task| {
                task.as_ref().map(|t| {
                    format!(
                        "Are you sure you want to delete \"{}\" permanently? This action cannot be undone.",
                        t.title
                    )
                })
            })
            .unwrap_or_default()
    });

    view! {
        <div class="tasks-page space-y-6">
            <header class="flex justify-between items-center">
                <div>
                    <h2 class="text-2xl font-black text-fg tracking-tight">"Tasks"</h2>
                    <p class="text-sm text-fg-muted">"Track work across every project"</p>
                </div>
                <button
                    type="button"
                    class="px-4 py-2 rounded-xl bg-brand text-white text-sm font-bold"
                    on:click=move |_| vm.open_create()
                >
                    <i class="fas fa-plus mr-2"></i>
                    "New Task"
                </button>
            </header>
            <TaskFilters search=vm.search status=vm.status_filter />
            <div class="bg-surface-elevated rounded-2xl border border-border">
                {move || {
                    if vm.loading.get() {
                        view! { <LoadingSpinner /> }.into_view()
                    } else if visible.with(Vec::is_empty) {
                        view! { <EmptyState title="No tasks found" icon="clipboard-list" /> }.into_view()
                    } else {
                        view! {
                            <TaskTable tasks=visible on_cycle=on_cycle on_view=on_view on_edit=on_edit on_delete=on_delete />
                        }
                        .into_view()
                    }
                }}
            </div>

            <Modal is_open=vm.form_open title=modal_title on_close=Callback::new(move |_| vm.close_form())>
                <form class="space-y-4" on:submit=on_save>
                    <TaskFormFields form=vm.form members=vm.team projects=Signal::from(vm.projects) />
                    <InlineErrorMessage error=vm.form_error />
                    <div class="pt-4 flex justify-end gap-3">
                        <button type="button" class="px-6 py-2 font-bold text-fg-muted rounded-xl" on:click=move |_| vm.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class="px-6 py-2 bg-brand text-white font-bold rounded-xl disabled:opacity-50" disabled=move || vm.saving.get()>
                            {move || if vm.editing.with(Option::is_some) { "Save Changes" } else { "Create Task" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <TaskDetailsModal viewing=vm.viewing on_close=Callback::new(move |_| vm.close_details()) />

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete Task"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| spawn_local(async move {
                    let _ = vm.confirm_delete().await;
                }))
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
