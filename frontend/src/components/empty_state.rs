use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// Font Awesome icon name without the `fa-` prefix.
    #[prop(default = "folder-open")]
    icon: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <i class=format!("fas fa-{} text-3xl text-fg-muted", icon) aria-hidden="true"></i>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
            {children.map(|action| view! { <div class="mt-4">{action()}</div> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_description_and_action() {
        let html = render_to_string(move || {
            view! {
                <EmptyState title="No projects found" description="Create one to get started" icon="folder">
                    <button>"New Project"</button>
                </EmptyState>
            }
        });
        assert!(html.contains("No projects found"));
        assert!(html.contains("Create one to get started"));
        assert!(html.contains("fa-folder"));
        assert!(html.contains("New Project"));
    }
}
