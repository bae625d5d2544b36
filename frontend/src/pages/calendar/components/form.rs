use crate::{
    api::{EventPriority, Reminder},
    pages::calendar::view_model::EventFormState,
};
use leptos::*;

const FIELD: &str = "w-full px-4 py-2 rounded-xl border border-border bg-form-control-bg text-sm";
const LABEL: &str = "block text-xs font-black text-fg-muted uppercase tracking-widest mb-2";

#[component]
pub fn EventFormFields(form: EventFormState) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class=LABEL for="event-title">"Title"</label>
                <input
                    id="event-title"
                    class=FIELD
                    placeholder="Event title"
                    prop:value=move || form.title.get()
                    on:input=move |ev| form.title.set(event_target_value(&ev))
                />
            </div>
            <div class="grid grid-cols-3 gap-3">
                <div>
                    <label class=LABEL for="event-date">"Date"</label>
                    <input id="event-date" type="date" class=FIELD
                        prop:value=move || form.date.get()
                        on:input=move |ev| form.date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="event-start">"Start"</label>
                    <input id="event-start" type="time" class=FIELD
                        prop:value=move || form.start.get()
                        on:input=move |ev| form.start.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="event-end">"End"</label>
                    <input id="event-end" type="time" class=FIELD
                        prop:value=move || form.end.get()
                        on:input=move |ev| form.end.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <span class=LABEL>"Priority"</span>
                <div class="flex gap-2">
                    {EventPriority::ALL
                        .into_iter()
                        .map(|p| view! {
                            <button
                                type="button"
                                class=move || if form.priority.get() == p {
                                    "px-3 py-1 text-xs rounded-lg border border-brand bg-brand-muted text-brand font-bold"
                                } else {
                                    "px-3 py-1 text-xs rounded-lg border border-border"
                                }
                                on:click=move |_| form.priority.set(p)
                            >
                                {p.as_str()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <span class=LABEL>"Reminders"</span>
                <div class="flex gap-4">
                    {Reminder::ALL
                        .into_iter()
                        .map(|r| view! {
                            <label class="flex items-center gap-2 text-sm">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.reminders.with(|list| list.contains(&r))
                                    on:change=move |_| form.toggle_reminder(r)
                                />
                                {r.label()}
                            </label>
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <label class=LABEL for="event-description">"Description"</label>
                <textarea
                    id="event-description"
                    rows="3"
                    class=FIELD
                    prop:value=move || form.description.get()
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}
