use crate::{
    api::{ApiClient, ApiError, Project, Task},
    components::modal::Modal,
    router::use_app_navigate,
};
use leptos::*;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.tasks.is_empty()
    }
}

pub fn project_target(project: &Project) -> String {
    format!("/projects/{}", project.id)
}

pub const TASK_TARGET: &str = "/tasks";

fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

/// Case-insensitive title filter over both collections.
pub fn filter_results(query: &str, tasks: Vec<Task>, projects: Vec<Project>) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }
    SearchResults {
        projects: projects
            .into_iter()
            .filter(|p| title_matches(&p.title, &needle))
            .collect(),
        tasks: tasks
            .into_iter()
            .filter(|t| title_matches(&t.title, &needle))
            .collect(),
    }
}

pub async fn run_search(api: &ApiClient, query: &str) -> Result<SearchResults, ApiError> {
    if query.trim().is_empty() {
        return Ok(SearchResults::default());
    }
    let (tasks, projects) = futures::join!(api.list_tasks(), api.list_projects());
    Ok(filter_results(query, tasks?, projects?))
}

#[cfg(target_arch = "wasm32")]
fn debounce(slot: StoredValue<Option<gloo_timers::callback::Timeout>>, run: impl FnOnce() + 'static) {
    // Dropping the previous timeout cancels it.
    slot.set_value(Some(gloo_timers::callback::Timeout::new(
        SEARCH_DEBOUNCE_MS,
        run,
    )));
}

#[component]
pub fn GlobalSearch(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let api = store_value(use_context::<ApiClient>().unwrap_or_default());
    let navigate = use_app_navigate();
    let query = create_rw_signal(String::new());
    let results = create_rw_signal(SearchResults::default());
    #[cfg(target_arch = "wasm32")]
    let pending = store_value(None::<gloo_timers::callback::Timeout>);

    let close = Callback::new(move |_: ()| {
        query.set(String::new());
        results.set(SearchResults::default());
        on_close.call(());
    });

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        let search = move || {
            spawn_local(async move {
                match run_search(&api.get_value(), &value).await {
                    Ok(found) => {
                        results.try_set(found);
                    }
                    Err(err) => log::error!("search failed: {}", err),
                }
            });
        };
        #[cfg(target_arch = "wasm32")]
        debounce(pending, search);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = search;
    };

    let select = move |target: String| {
        navigate.call(target);
        close.call(());
    };

    view! {
        <Modal is_open=is_open title="Search" on_close=close>
            <input
                type="search"
                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                placeholder="Search projects and tasks..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=on_input
            />
            <div class="search-results mt-3 text-sm">
                <Show when=move || results.with(|r| !r.projects.is_empty())>
                    <div class="px-2 py-1 text-xs font-semibold text-fg-muted">"Projects"</div>
                    <For
                        each=move || results.get().projects
                        key=|project| project.id.clone()
                        children=move |project| {
                            let target = project_target(&project);
                            view! {
                                <button type="button" class="search-hit block w-full text-left px-2 py-2 rounded hover:bg-surface-muted"
                                    on:click=move |_| select(target.clone())>
                                    <i class="fas fa-folder mr-2"></i>{project.title}
                                </button>
                            }
                        }
                    />
                </Show>
                <Show when=move || results.with(|r| !r.tasks.is_empty())>
                    <div class="px-2 py-1 mt-2 text-xs font-semibold text-fg-muted">"Tasks"</div>
                    <For
                        each=move || results.get().tasks
                        key=|task| task.id.clone()
                        children=move |task| view! {
                            <button type="button" class="search-hit block w-full text-left px-2 py-2 rounded hover:bg-surface-muted"
                                on:click=move |_| select(TASK_TARGET.to_string())>
                                <i class="fas fa-clipboard-list mr-2"></i>{task.title}
                            </button>
                        }
                    />
                </Show>
                <Show when=move || !query.with(String::is_empty) && results.with(SearchResults::is_empty)>
                    <p class="p-2 text-fg-muted">"No results found."</p>
                </Show>
            </div>
        </Modal>
    }
}
