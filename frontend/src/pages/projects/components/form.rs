use crate::{
    api::User,
    pages::projects::{utils::toggle_member, view_model::ProjectFormState},
};
use leptos::*;

const FIELD: &str = "w-full px-4 py-2 rounded-lg border border-border bg-form-control-bg text-sm";
const LABEL: &str = "block text-xs font-bold text-fg-muted uppercase mb-1";

#[component]
pub fn ProjectForm(form: ProjectFormState, #[prop(into)] team: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class=LABEL for="project-title">"Title"</label>
                <input
                    id="project-title"
                    class=FIELD
                    prop:value=move || form.title.get()
                    on:input=move |ev| form.title.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label class=LABEL for="project-description">"Description"</label>
                <textarea
                    id="project-description"
                    rows="3"
                    class=FIELD
                    prop:value=move || form.description.get()
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=LABEL for="project-start">"Start Date"</label>
                    <input
                        id="project-start"
                        type="date"
                        class=FIELD
                        prop:value=move || form.start_date.get()
                        on:input=move |ev| form.start_date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="project-end">"End Date"</label>
                    <input
                        id="project-end"
                        type="date"
                        class=FIELD
                        prop:value=move || form.end_date.get()
                        on:input=move |ev| form.end_date.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <fieldset>
                <legend class=LABEL>"Members"</legend>
                <div class="max-h-40 overflow-y-auto space-y-1">
                    {move || {
                        team.get()
                            .into_iter()
                            .map(|member| {
                                let id = member.id.clone();
                                let checked_id = member.id.clone();
                                view! {
                                    <label class="flex items-center gap-2 text-sm">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.members.with(|ids| ids.contains(&checked_id))
                                            on:change=move |_| form.members.update(|ids| toggle_member(ids, &id))
                                        />
                                        <span>{member.display_name()}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </fieldset>
        </div>
    }
}
