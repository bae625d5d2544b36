use crate::{
    api::CalendarEvent,
    utils::time::{format_date_time, format_time},
};
use leptos::*;

#[component]
pub fn EventDetails(
    event: CalendarEvent,
    can_manage: bool,
    on_edit: Callback<CalendarEvent>,
    on_delete: Callback<CalendarEvent>,
) -> impl IntoView {
    let when = match &event.end_time {
        Some(end) => format!("{} - {}", format_date_time(&event.start_time), format_time(Some(end))),
        None => format_date_time(&event.start_time),
    };
    let edit_target = event.clone();
    let delete_target = event.clone();
    view! {
        <div class="event-details p-6 space-y-4">
            <div class="flex items-center justify-between">
                <span
                    class="px-2.5 py-0.5 rounded-full text-[10px] font-bold uppercase tracking-wide text-white"
                    style=format!("background-color: {}", event.color())
                >
                    {event.priority.as_str()}
                </span>
                <span class="text-xs text-fg-muted"><i class="fas fa-clock mr-1"></i>{when}</span>
            </div>
            {event.creator_name.clone().map(|name| view! {
                <p class="text-xs text-fg-muted">"Created by "<span class="font-semibold text-fg">{name}</span></p>
            })}
            {event.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                <p class="text-sm text-fg leading-relaxed">{d}</p>
            })}
            {(!event.reminders.is_empty()).then(|| view! {
                <div class="flex gap-2">
                    {event.reminders.iter().map(|r| view! {
                        <span class="px-2 py-0.5 rounded-lg bg-surface-muted text-xs"><i class="fas fa-bell mr-1"></i>{r.label()}</span>
                    }).collect_view()}
                </div>
            })}
            {can_manage.then(|| view! {
                <div class="manage-actions flex gap-3 pt-2">
                    <button type="button" class="flex-1 py-2 rounded-xl border border-border text-sm font-semibold" on:click=move |_| on_edit.call(edit_target.clone())>
                        <i class="fas fa-pen mr-2"></i>"Edit"
                    </button>
                    <button type="button" class="px-4 py-2 rounded-xl border border-status-error-border text-status-error-text" aria-label="Delete event" on:click=move |_| on_delete.call(delete_target.clone())>
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
            })}
        </div>
    }
}
