use leptos::*;

/// Circle with the user's initials, or their picture when one is set.
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional, into)] image_url: Option<String>,
    #[prop(optional)] small: bool,
) -> impl IntoView {
    let size = if small { "h-7 w-7 text-xs" } else { "h-10 w-10 text-sm" };
    match image_url.filter(|url| !url.is_empty()) {
        Some(url) => view! {
            <img class=format!("avatar rounded-full object-cover {}", size) src=url alt=name.clone() />
        }
        .into_view(),
        None => view! {
            <span class=format!("avatar inline-flex items-center justify-center rounded-full bg-brand-muted text-brand font-semibold {}", size)>
                {initials_of(&name)}
            </span>
        }
        .into_view(),
    }
}

pub fn initials_of(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card bg-surface-elevated overflow-hidden shadow rounded-lg px-4 py-5 sm:p-6">
            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
            {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
        </div>
    }
}

/// Labelled horizontal bars, one per point, scaled to the largest value.
#[component]
pub fn BarList(#[prop(into)] points: Signal<Vec<(String, i64)>>) -> impl IntoView {
    view! {
        <ul class="bar-list space-y-2">
            {move || {
                let points = points.get();
                let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0);
                points
                    .into_iter()
                    .map(|(label, value)| {
                        let width = bar_width(value, max);
                        view! {
                            <li class="text-sm">
                                <div class="flex justify-between text-fg-muted">
                                    <span>{label}</span>
                                    <span>{value}</span>
                                </div>
                                <div class="h-2 rounded bg-surface-muted">
                                    <div class="h-2 rounded bg-brand" style=format!("width: {}%", width)></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

pub fn bar_width(value: i64, max: i64) -> i64 {
    if max <= 0 || value <= 0 {
        0
    } else {
        (value * 100 / max).min(100)
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn bar_list_renders_labels_and_values() {
        let html = render_to_string(move || {
            let points = Signal::derive(|| vec![("To Do".to_string(), 4), ("Completed".to_string(), 2)]);
            view! { <BarList points=points /> }
        });
        assert!(html.contains("To Do"));
        assert!(html.contains("width: 50%"));
    }

    #[test]
    fn avatar_falls_back_to_initials() {
        let html = render_to_string(move || view! { <Avatar name="Ada Admin" /> });
        assert!(html.contains("AA"));
    }
}
