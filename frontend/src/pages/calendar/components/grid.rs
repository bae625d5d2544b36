use crate::{
    api::{CalendarEvent, EventPriority},
    pages::calendar::utils::{events_on, MonthCursor},
    utils::time::today_local,
};
use chrono::{Datelike, NaiveDate};
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MAX_PER_DAY: usize = 3;

#[component]
pub fn PriorityLegend() -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            {EventPriority::ALL
                .into_iter()
                .map(|p| view! {
                    <div class="flex items-center gap-2">
                        <span class="w-2.5 h-2.5 rounded-full" style=format!("background-color: {}", p.color())></span>
                        <span class="text-[10px] font-bold text-fg-muted uppercase tracking-widest">{p.as_str()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DayCell(
    date: NaiveDate,
    in_month: bool,
    events: Vec<CalendarEvent>,
    on_day: Callback<NaiveDate>,
    on_event: Callback<CalendarEvent>,
) -> impl IntoView {
    let today = date == today_local();
    let hidden = events.len().saturating_sub(MAX_PER_DAY);
    let class = format!(
        "day-cell min-h-[6rem] p-1.5 border border-border text-left {} {}",
        if in_month { "bg-surface-elevated" } else { "bg-surface-muted text-fg-muted" },
        if today { "ring-2 ring-brand" } else { "" }
    );
    view! {
        <div class=class on:click=move |_| on_day.call(date)>
            <span class="text-xs font-bold">{date.day()}</span>
            <div class="space-y-1 mt-1">
                {events
                    .into_iter()
                    .take(MAX_PER_DAY)
                    .map(|event| {
                        let style = format!("background-color: {}", event.color());
                        let title = event.title.clone();
                        view! {
                            <button
                                type="button"
                                class="calendar-event block w-full truncate rounded px-1.5 py-0.5 text-[11px] font-semibold text-white text-left"
                                style=style
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_event.call(event.clone());
                                }
                            >
                                {title}
                            </button>
                        }
                    })
                    .collect_view()}
                {(hidden > 0).then(|| view! { <p class="text-[10px] text-fg-muted">{format!("+{} more", hidden)}</p> })}
            </div>
        </div>
    }
}

#[component]
pub fn MonthGrid(
    #[prop(into)] cursor: Signal<MonthCursor>,
    #[prop(into)] events: Signal<Vec<CalendarEvent>>,
    on_day: Callback<NaiveDate>,
    on_event: Callback<CalendarEvent>,
) -> impl IntoView {
    view! {
        <div class="month-grid">
            <div class="grid grid-cols-7 text-center text-xs font-black uppercase tracking-widest text-fg-muted mb-2">
                {WEEKDAYS.into_iter().map(|d| view! { <div>{d}</div> }).collect_view()}
            </div>
            {move || {
                let cursor = cursor.get();
                events.with(|events| {
                    cursor
                        .weeks()
                        .into_iter()
                        .map(|week| view! {
                            <div class="grid grid-cols-7">
                                {week
                                    .into_iter()
                                    .map(|date| view! {
                                        <DayCell
                                            date=date
                                            in_month=date.month() == cursor.month
                                            events=events_on(events, date)
                                            on_day=on_day
                                            on_event=on_event
                                        />
                                    })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
