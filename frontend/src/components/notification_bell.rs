use crate::{
    api::{ApiClient, Notification},
    router::use_app_navigate,
    state::{
        notifications::{self, use_inbox},
        toast::use_toast,
    },
    utils::time,
};
use leptos::*;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let (inbox, set_inbox) = use_inbox();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let toasts = use_toast();
    let navigate = use_app_navigate();
    let (open, set_open) = create_signal(false);
    let api = store_value(api);

    let toggle = move |_| {
        let now_open = !open.get_untracked();
        set_open.set(now_open);
        if now_open {
            let api = api.get_value();
            spawn_local(async move {
                let _ = notifications::refresh_inbox(&api, set_inbox, None).await;
            });
        }
    };

    let mark_all = move |_| {
        let api = api.get_value();
        spawn_local(async move {
            if let Err(err) = notifications::mark_all_notifications_read(&api, set_inbox).await {
                toasts.error(err.error);
            }
        });
    };

    let open_item = Callback::new(move |item: Notification| {
        let api = api.get_value();
        let id = item.id.clone();
        spawn_local(async move {
            let _ = notifications::mark_notification_read(&api, set_inbox, id).await;
        });
        if let Some(link) = item.link.filter(|link| !link.is_empty()) {
            set_open.set(false);
            navigate.call(link);
        }
    });

    let badge = move || inbox.with(|state| state.badge_label());

    view! {
        <div class="notification-bell relative">
            <button
                type="button"
                class="relative p-2 rounded-full text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Notifications"
                on:click=toggle
            >
                <i class="fas fa-bell"></i>
                {move || badge().map(|label| view! {
                    <span class="badge absolute -top-1 -right-1 rounded-full bg-status-error-bg text-status-error-text text-xs px-1.5">
                        {label}
                    </span>
                })}
            </button>
            <Show when=move || open.get()>
                <div class="popover absolute right-0 mt-2 w-80 rounded-lg bg-surface-elevated shadow-xl border border-border z-50">
                    <div class="flex items-center justify-between px-4 py-3 border-b border-border">
                        <h3 class="text-sm font-semibold text-fg">"Notifications"</h3>
                        <Show when=move || inbox.with(|state| state.unread_count > 0)>
                            <button type="button" class="text-xs text-brand hover:underline" on:click=mark_all>
                                "Mark all as read"
                            </button>
                        </Show>
                    </div>
                    <Show
                        when=move || inbox.with(|state| !state.notifications.is_empty())
                        fallback=|| view! {
                            <p class="px-4 py-6 text-center text-sm text-fg-muted">"No notifications"</p>
                        }
                    >
                        <ul class="max-h-96 overflow-y-auto divide-y divide-border">
                            <For
                                each=move || inbox.get().notifications
                                key=|item| (item.id.clone(), item.is_read)
                                children=move |item| view! { <NotificationRow item=item on_open=open_item /> }
                            />
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NotificationRow(item: Notification, on_open: Callback<Notification>) -> impl IntoView {
    let class = if item.is_read {
        "notification-item px-4 py-3 cursor-pointer hover:bg-surface-muted"
    } else {
        "notification-item unread px-4 py-3 cursor-pointer bg-brand-muted hover:bg-surface-muted"
    };
    let when = item
        .created_at
        .as_deref()
        .map(time::format_date_time)
        .unwrap_or_default();
    let title = item.title.clone();
    let message = item.message.clone();
    view! {
        <li class=class on:click=move |_| on_open.call(item.clone())>
            <p class="text-sm font-medium text-fg">{title}</p>
            <p class="text-sm text-fg-muted">{message}</p>
            <p class="text-xs text-fg-muted mt-1">{when}</p>
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notifications::InboxState;
    use crate::test_support::ssr::render_to_string;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: format!("Title {}", id),
            message: format!("Message {}", id),
            is_read,
            created_at: None,
            link: None,
        }
    }

    #[test]
    fn badge_shows_unread_count() {
        let html = render_to_string(move || {
            let ctx = create_signal(InboxState {
                notifications: vec![notification("1", false), notification("2", true)],
                unread_count: 1,
                loading: false,
            });
            provide_context(ctx);
            view! { <NotificationBell /> }
        });
        assert!(html.contains("badge"));
    }

    #[test]
    fn badge_hidden_without_unread() {
        let html = render_to_string(move || {
            provide_context(create_signal(InboxState::default()));
            view! { <NotificationBell /> }
        });
        assert!(!html.contains("badge"));
    }
}
