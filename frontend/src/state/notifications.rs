use leptos::*;

use crate::api::{ApiClient, ApiError, Notification, NotificationFeed};
use crate::state::{auth::AuthState, toast::ToastContext};

pub const POLL_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboxState {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub loading: bool,
}

impl InboxState {
    /// Replaces the inbox with a fresh poll. Returns the newest notification
    /// when the unread count grew and that notification is itself unread.
    pub fn apply_feed(&mut self, feed: NotificationFeed) -> Option<Notification> {
        let announce = if feed.unread_count > self.unread_count {
            feed.notifications.first().filter(|n| !n.is_read).cloned()
        } else {
            None
        };
        self.notifications = feed.notifications;
        self.unread_count = feed.unread_count;
        self.loading = false;
        announce
    }

    /// Returns false when the notification was unknown or already read.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let Some(item) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.is_read)
        else {
            return false;
        };
        item.is_read = true;
        self.unread_count = self.unread_count.saturating_sub(1);
        true
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.notifications {
            item.is_read = true;
        }
        self.unread_count = 0;
    }

    pub fn badge_label(&self) -> Option<String> {
        match self.unread_count {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

pub type InboxContext = (ReadSignal<InboxState>, WriteSignal<InboxState>);

pub fn use_inbox() -> InboxContext {
    use_context::<InboxContext>().unwrap_or_else(|| create_signal(InboxState::default()))
}

pub async fn refresh_inbox(
    api: &ApiClient,
    set_inbox: WriteSignal<InboxState>,
    toasts: Option<ToastContext>,
) -> Result<(), ApiError> {
    set_inbox.update(|state| state.loading = true);
    match api.list_notifications().await {
        Ok(feed) => {
            let mut announce = None;
            set_inbox.update(|state| announce = state.apply_feed(feed));
            if let (Some(latest), Some(toasts)) = (announce, toasts) {
                toasts.info(latest.message);
            }
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to fetch notifications: {}", err);
            set_inbox.update(|state| state.loading = false);
            Err(err)
        }
    }
}

/// Marks one notification read locally, then on the server. A server
/// failure triggers a refetch so the badge reflects reality.
pub async fn mark_notification_read(
    api: &ApiClient,
    set_inbox: WriteSignal<InboxState>,
    id: String,
) -> Result<(), ApiError> {
    let mut changed = false;
    set_inbox.update(|state| changed = state.mark_read(&id));
    if !changed {
        return Ok(());
    }
    if let Err(err) = api.mark_notification_read(&id).await {
        log::warn!("mark read failed for {}: {}", id, err);
        let _ = refresh_inbox(api, set_inbox, None).await;
        return Err(err);
    }
    Ok(())
}

pub async fn mark_all_notifications_read(
    api: &ApiClient,
    set_inbox: WriteSignal<InboxState>,
) -> Result<(), ApiError> {
    api.mark_all_notifications_read().await?;
    set_inbox.update(InboxState::mark_all_read);
    Ok(())
}

/// Signing in loads the new user's inbox quietly; signing out empties it so
/// nothing carries over to the next account.
pub async fn on_session_change(api: &ApiClient, set_inbox: WriteSignal<InboxState>, signed_in: bool) {
    if signed_in {
        let _ = refresh_inbox(api, set_inbox, None).await;
    } else {
        set_inbox.set(InboxState::default());
    }
}

/// Keeps the provided inbox in step with the session flag.
pub fn follow_session(auth: ReadSignal<AuthState>) {
    let (_, set_inbox) = use_inbox();
    let api = store_value(use_context::<ApiClient>().unwrap_or_default());
    let signed_in = create_memo(move |_| auth.with(|state| state.is_authenticated));
    create_effect(move |_| {
        let signed_in = signed_in.get();
        let api = api.get_value();
        spawn_local(async move { on_session_change(&api, set_inbox, signed_in).await });
    });
}

/// Provides the inbox and starts the 60 second poll for the current owner.
/// Ticks without a signed-in session are skipped; the first load comes from
/// [`follow_session`].
pub fn provide_inbox(api: ApiClient, toasts: ToastContext) -> InboxContext {
    let (inbox, set_inbox) = create_signal(InboxState::default());
    provide_context((inbox, set_inbox));
    start_polling(api, set_inbox, toasts);
    (inbox, set_inbox)
}

#[cfg(target_arch = "wasm32")]
fn start_polling(api: ApiClient, set_inbox: WriteSignal<InboxState>, toasts: ToastContext) {
    let poll = {
        let api = api.clone();
        move || {
            if crate::identity::session::load_session().is_none() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let _ = refresh_inbox(&api, set_inbox, Some(toasts)).await;
            });
        }
    };
    let interval = gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, poll);
    let handle = store_value(Some(interval));
    on_cleanup(move || {
        handle.update_value(|slot| {
            slot.take();
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn start_polling(_api: ApiClient, _set_inbox: WriteSignal<InboxState>, _toasts: ToastContext) {}
