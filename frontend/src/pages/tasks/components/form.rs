use crate::{
    api::{Project, TaskPriority, User},
    pages::tasks::{utils::PERSONAL_PROJECT, view_model::TaskFormState},
};
use leptos::*;

const FIELD: &str = "w-full px-4 py-2 rounded-xl border border-border bg-form-control-bg text-sm";
const LABEL: &str = "block text-xs font-black text-fg-muted uppercase tracking-widest mb-2";

/// Inputs of the task modal. Projects are hidden when the task's project is
/// fixed, and the assignee list is whatever the caller passes in.
#[component]
pub fn TaskFormFields(
    form: TaskFormState,
    #[prop(into)] members: Signal<Vec<User>>,
    #[prop(optional, into)] projects: Option<Signal<Vec<Project>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class=LABEL for="task-title">"Title"</label>
                <input
                    id="task-title"
                    class=FIELD
                    placeholder="Task name..."
                    prop:value=move || form.title.get()
                    on:input=move |ev| form.title.set(event_target_value(&ev))
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                {projects.map(|projects| view! {
                    <div>
                        <label class=LABEL for="task-project">"Project"</label>
                        <select
                            id="task-project"
                            class=FIELD
                            prop:value=move || form.project.get()
                            on:change=move |ev| form.project.set(event_target_value(&ev))
                        >
                            <option value="">"Select Project"</option>
                            <option value=PERSONAL_PROJECT>"Personal"</option>
                            {move || projects.get().into_iter().map(|p| view! {
                                <option value=p.id.clone()>{p.title.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                })}
                <div>
                    <label class=LABEL for="task-priority">"Priority"</label>
                    <select
                        id="task-priority"
                        class=FIELD
                        prop:value=move || form.priority.get().as_str()
                        on:change=move |ev| {
                            if let Some(priority) = TaskPriority::parse(&event_target_value(&ev)) {
                                form.priority.set(priority);
                            }
                        }
                    >
                        {TaskPriority::ALL.into_iter().map(|p| view! {
                            <option value=p.as_str()>{p.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=LABEL for="task-assignee">"Assignee"</label>
                    <select
                        id="task-assignee"
                        class=FIELD
                        prop:value=move || form.assignee.get()
                        on:change=move |ev| form.assignee.set(event_target_value(&ev))
                    >
                        <option value="">"Select Member"</option>
                        {move || members.get().into_iter().map(|m| view! {
                            <option value=m.id.clone()>{m.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div>
                    <label class=LABEL for="task-deadline">"Deadline"</label>
                    <input
                        id="task-deadline"
                        type="datetime-local"
                        class=FIELD
                        prop:value=move || form.deadline.get()
                        on:input=move |ev| form.deadline.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label class=LABEL for="task-description">"Description"</label>
                <textarea
                    id="task-description"
                    rows="3"
                    class=FIELD
                    prop:value=move || form.description.get()
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}
