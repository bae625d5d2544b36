use super::{
    components::{grid::PriorityLegend, EventDetails, EventFormFields, MonthGrid},
    utils::can_manage,
    view_model::CalendarViewModel,
};
use crate::{
    api::CalendarEvent,
    components::{confirm_dialog::ConfirmDialog, layout::LoadingSpinner, modal::Modal},
    router::use_app_navigate,
    state::auth::use_auth,
};
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let vm = CalendarViewModel::new();
    let (auth, _) = use_auth();
    let navigate = use_app_navigate();

    // Task deadlines in the feed link to their page instead of opening details.
    let on_event = Callback::new(move |event: CalendarEvent| match event.url.clone() {
        Some(url) if !url.is_empty() => navigate.call(url),
        _ => vm.selected.set(Some(event)),
    });
    let on_day = Callback::new(move |date: NaiveDate| vm.open_create(Some(date.format("%Y-%m-%d").to_string())));
    let on_edit = Callback::new(move |event: CalendarEvent| vm.open_edit(&event));
    let on_delete = Callback::new(move |event: CalendarEvent| vm.request_delete(event));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.save().await;
        });
    };

    let form_title = Signal::derive(move || {
        let title = if vm.editing.with(Option::is_some) { "Edit Event" } else { "Add Event" };
        title.to_string()
    });
    let details_title = Signal::derive(move || vm.selected.with(|e| e.as_ref().map(|e| e.title.clone()).unwrap_or_default()));

    view! {
        <div class="calendar-page space-y-6">
            <header class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                <div class="flex flex-col sm:flex-row sm:items-center gap-4">
                    <h2 class="text-2xl font-black text-fg tracking-tight">"Calendar"</h2>
                    <PriorityLegend />
                </div>
                <button
                    type="button"
                    class="px-4 py-2 rounded-xl bg-brand text-white text-sm font-bold"
                    on:click=move |_| vm.open_create(None)
                >
                    <i class="fas fa-plus mr-2"></i>"Add Event"
                </button>
            </header>

            <section class="bg-surface-elevated rounded-2xl border border-border p-4 md:p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <div class="flex gap-1">
                        <button type="button" class="px-3 py-1.5 rounded-lg border border-border" aria-label="Previous month" on:click=move |_| vm.prev_month()>
                            <i class="fas fa-chevron-left"></i>
                        </button>
                        <button type="button" class="px-3 py-1.5 rounded-lg border border-border" aria-label="Next month" on:click=move |_| vm.next_month()>
                            <i class="fas fa-chevron-right"></i>
                        </button>
                        <button type="button" class="px-3 py-1.5 rounded-lg border border-border text-sm font-semibold" on:click=move |_| vm.this_month()>
                            "Today"
                        </button>
                    </div>
                    <h3 class="text-lg font-black">{move || vm.cursor.get().title()}</h3>
                </div>
                {move || if vm.loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    view! { <MonthGrid cursor=vm.cursor events=vm.events on_day=on_day on_event=on_event /> }.into_view()
                }}
            </section>

            <Modal is_open=vm.form_open title=form_title on_close=Callback::new(move |_| vm.close_form())>
                <form class="p-6 space-y-4" on:submit=on_submit>
                    <EventFormFields form=vm.form />
                    <div class="flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-fg-muted rounded-lg" on:click=move |_| vm.close_form()>"Cancel"</button>
                        <button type="submit" class="px-4 py-2 bg-brand text-white rounded-lg disabled:opacity-50" disabled=move || vm.saving.get()>
                            "Save Event"
                        </button>
                    </div>
                </form>
            </Modal>

            <Modal
                is_open=Signal::derive(move || vm.selected.with(Option::is_some))
                title=details_title
                on_close=Callback::new(move |_| vm.selected.set(None))
            >
                {move || vm.selected.get().map(|event| {
                    let manage = auth.with(|a| can_manage(&event, a.user.as_ref()));
                    view! { <EventDetails event=event can_manage=manage on_edit=on_edit on_delete=on_delete /> }
                })}
            </Modal>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete Event"
                message="Are you sure you want to delete this event?"
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
