use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Field messages carried in `details`, either `{"errors": [..]}` or a
/// `{"field": "message"}` map.
pub fn detail_messages(error: &ApiError) -> Vec<String> {
    let Some(details) = error.details.as_ref() else {
        return Vec::new();
    };
    if let Some(list) = details.get("errors").and_then(Value::as_array) {
        return list
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
    }
    match details {
        Value::Object(map) => map
            .iter()
            .filter_map(|(field, msg)| msg.as_str().map(|m| format!("{}: {}", field, m)))
            .collect(),
        _ => Vec::new(),
    }
}

fn shows_code(code: &str) -> bool {
    !code.is_empty() && code != "UNKNOWN" && code != "VALIDATION_ERROR"
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="error-banner bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let details = detail_messages(&e);
                            let code = shows_code(&e.code).then(|| e.code.clone());
                            let list = (!details.is_empty()).then(|| view! {
                                <ul class="list-disc list-inside text-sm">
                                    {details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                                </ul>
                            });
                            view! {
                                <>
                                    {list}
                                    {code.map(|code| view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> })}
                                </>
                            }
                        })
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn LoadError(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-banner flex items-center justify-between bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">
                <i class="fas fa-exclamation-circle mr-2"></i>
                {message}
            </p>
            {on_retry.map(|retry| view! {
                <button type="button" class="text-sm font-semibold underline" on:click=move |_| retry.call(())>
                    "Retry"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn details_accept_list_and_map_forms() {
        let mut error = ApiError::validation("Invalid");
        error.details = Some(json!({"errors": ["Title is required"]}));
        assert_eq!(detail_messages(&error), vec!["Title is required"]);

        error.details = Some(json!({"email": "is invalid"}));
        assert_eq!(detail_messages(&error), vec!["email: is invalid"]);

        error.details = None;
        assert!(detail_messages(&error).is_empty());
    }

    #[test]
    fn code_hidden_for_generic_errors() {
        assert!(!shows_code("UNKNOWN"));
        assert!(!shows_code("VALIDATION_ERROR"));
        assert!(shows_code("HTTP_500"));
    }
}
