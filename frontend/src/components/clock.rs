use crate::utils::time::{format_clock, now_local};
use chrono::{DateTime, Local};
use leptos::*;

/// Current local time, ticking once a second while the owner is mounted.
pub fn use_now() -> ReadSignal<DateTime<Local>> {
    let (now, set_now) = create_signal(now_local());
    #[cfg(target_arch = "wasm32")]
    {
        let interval = gloo_timers::callback::Interval::new(1_000, move || {
            set_now.set(now_local());
        });
        // Dropping the interval cancels it.
        let interval = store_value(Some(interval));
        on_cleanup(move || interval.update_value(|slot| drop(slot.take())));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;
    now
}

#[component]
pub fn LiveClock(#[prop(optional)] large: bool) -> impl IntoView {
    let now = use_now();
    let time_class = if large {
        "text-4xl font-bold tracking-wider font-mono"
    } else {
        "text-lg font-semibold font-mono"
    };
    view! {
        <div class="live-clock">
            <div class=time_class>{move || format_clock(&now.get())}</div>
            <div class="text-sm text-fg-muted">{move || now.get().format("%A, %B %-d, %Y").to_string()}</div>
        </div>
    }
}
