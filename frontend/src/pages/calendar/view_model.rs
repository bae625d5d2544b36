use super::{
    repository::CalendarRepository,
    utils::{EventFormValues, MonthCursor},
};
use crate::api::{ApiError, CalendarEvent, EventPriority, Reminder};
use crate::state::toast::{use_toast, ToastContext};
use crate::utils::time::today_local;
use leptos::*;

#[derive(Clone, Copy)]
pub struct EventFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub date: RwSignal<String>,
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    pub priority: RwSignal<EventPriority>,
    pub reminders: RwSignal<Vec<Reminder>>,
}

impl Default for EventFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            start: create_rw_signal(String::new()),
            end: create_rw_signal(String::new()),
            priority: create_rw_signal(EventPriority::Normal),
            reminders: create_rw_signal(Vec::new()),
        }
    }
}

impl EventFormState {
    pub fn values(&self) -> EventFormValues {
        EventFormValues {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            date: self.date.get_untracked(),
            start: self.start.get_untracked(),
            end: self.end.get_untracked(),
            priority: self.priority.get_untracked(),
            reminders: self.reminders.get_untracked(),
        }
    }

    pub fn load(&self, values: EventFormValues) {
        self.title.set(values.title);
        self.description.set(values.description);
        self.date.set(values.date);
        self.start.set(values.start);
        self.end.set(values.end);
        self.priority.set(values.priority);
        self.reminders.set(values.reminders);
    }

    pub fn toggle_reminder(&self, reminder: Reminder) {
        let mut values = self.values();
        values.toggle_reminder(reminder);
        self.reminders.set(values.reminders);
    }
}

#[derive(Clone, Copy)]
pub struct CalendarViewModel {
    pub events: RwSignal<Vec<CalendarEvent>>,
    pub loading: RwSignal<bool>,
    pub cursor: RwSignal<MonthCursor>,
    pub form: EventFormState,
    pub form_open: RwSignal<bool>,
    /// Event id while editing.
    pub editing: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub selected: RwSignal<Option<CalendarEvent>>,
    pub pending_delete: RwSignal<Option<CalendarEvent>>,
    repo: StoredValue<CalendarRepository>,
    toasts: ToastContext,
}

impl CalendarViewModel {
    pub fn new() -> Self {
        Self::with_repository(CalendarRepository::from_context())
    }

    pub fn with_repository(repo: CalendarRepository) -> Self {
        let vm = Self {
            events: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            cursor: create_rw_signal(MonthCursor::containing(today_local())),
            form: EventFormState::default(),
            form_open: create_rw_signal(false),
            editing: create_rw_signal(None),
            saving: create_rw_signal(false),
            selected: create_rw_signal(None),
            pending_delete: create_rw_signal(None),
            repo: store_value(repo),
            toasts: use_toast(),
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            vm.reload().await;
        });
        vm
    }

    pub async fn reload(&self) {
        match self.repo.get_value().events().await {
            Ok(events) => self.events.set(events),
            Err(err) => log::error!("loading calendar events failed: {}", err),
        }
        self.loading.set(false);
    }

    pub fn prev_month(&self) {
        self.cursor.update(|c| *c = c.prev());
    }

    pub fn next_month(&self) {
        self.cursor.update(|c| *c = c.next());
    }

    pub fn this_month(&self) {
        self.cursor.set(MonthCursor::containing(today_local()));
    }

    /// Opens an empty form, optionally on a clicked day.
    pub fn open_create(&self, date: Option<String>) {
        self.form.load(EventFormValues {
            date: date.unwrap_or_default(),
            ..EventFormValues::default()
        });
        self.editing.set(None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, event: &CalendarEvent) {
        self.form.load(EventFormValues::from_event(event));
        self.editing.set(Some(event.id.clone()));
        self.selected.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.editing.set(None);
    }

    /// Validation failures are toasted and never reach the network.
    pub async fn save(&self) -> Result<(), ApiError> {
        if self.saving.get_untracked() {
            return Ok(());
        }
        let draft = match self.form.values().to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.toasts.error(message.clone());
                return Err(ApiError::validation(message));
            }
        };
        let repo = self.repo.get_value();
        let editing = self.editing.get_untracked();
        self.saving.set(true);
        let result = match &editing {
            None => repo.create(&draft).await.map(|_| "Event created successfully"),
            Some(id) => repo.update(id, &draft).await.map(|()| "Event updated"),
        };
        self.saving.set(false);
        match result {
            Ok(message) => {
                self.toasts.success(message);
                self.close_form();
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                let fallback = if editing.is_some() { "Failed to update" } else { "Failed to create event" };
                self.toasts.error(err.message_or(fallback));
                Err(err)
            }
        }
    }

    pub fn request_delete(&self, event: CalendarEvent) {
        self.selected.set(None);
        self.pending_delete.set(Some(event));
    }

    pub async fn confirm_delete(&self) -> Result<(), ApiError> {
        let Some(event) = self.pending_delete.get_untracked() else {
            return Ok(());
        };
        match self.repo.get_value().delete(&event.id).await {
            Ok(()) => {
                self.events.update(|list| list.retain(|e| e.id != event.id));
                self.pending_delete.set(None);
                self.toasts.success("Event deleted");
                Ok(())
            }
            Err(err) => {
                self.toasts.error("Failed to delete");
                Err(err)
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::state::toast::provide_toasts;
    use serde_json::json;

    fn server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/calendar/events");
            then.status(200).json_body(json!([
                {"id": 7, "title": "Review", "start_time": "2025-03-05T12:00:00Z", "end_time": "2025-03-05T13:00:00Z", "priority": "High", "created_by": "u-1"}
            ]));
        });
        server
    }

    fn view_model(server: &MockServer) -> CalendarViewModel {
        let api = ApiClient::new_with_base_url(server.url(""));
        CalendarViewModel::with_repository(CalendarRepository::new_with_client(api))
    }

    #[tokio::test]
    async fn backwards_times_are_rejected_before_posting() {
        let runtime = create_runtime();
        let toasts = provide_toasts();
        let server = server();
        let vm = view_model(&server);
        vm.open_create(Some("2025-03-05".into()));
        vm.form.title.set("Standup".into());
        vm.form.start.set("10:00".into());
        vm.form.end.set("09:00".into());

        let err = vm.save().await.unwrap_err();

        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(toasts.toasts().get_untracked()[0].message, "End time must be after start time");
        assert_eq!(server.hits(POST, "/api/calendar/events"), 0);
        assert!(vm.form_open.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn blank_form_asks_for_required_fields() {
        let runtime = create_runtime();
        let toasts = provide_toasts();
        let server = server();
        let vm = view_model(&server);
        vm.open_create(None);

        assert!(vm.save().await.is_err());

        assert_eq!(toasts.toasts().get_untracked()[0].message, "Please fill in all required fields");
        assert_eq!(server.hits(POST, "/api/calendar/events"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn created_event_is_posted_and_list_refetched() {
        let runtime = create_runtime();
        let server = server();
        server.mock(|when, then| {
            when.method(POST).path("/api/calendar/events");
            then.status(201).json_body(json!({"id": 8, "title": "Standup", "start_time": "2025-03-05T09:00:00Z"}));
        });
        let vm = view_model(&server);
        vm.open_create(Some("2025-03-05".into()));
        vm.form.title.set("Standup".into());
        vm.form.start.set("09:00".into());
        vm.form.end.set("09:15".into());
        vm.form.priority.set(EventPriority::Medium);
        vm.form.toggle_reminder(Reminder::OneDayBefore);

        vm.save().await.unwrap();

        let body = server.last_body(POST, "/api/calendar/events").unwrap();
        assert_eq!(body["title"], json!("Standup"));
        assert_eq!(body["priority"], json!("Medium"));
        assert_eq!(body["reminders"], json!(["one_day_before"]));
        assert!(!vm.form_open.get_untracked());
        assert_eq!(vm.events.with_untracked(Vec::len), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn edit_patches_existing_event() {
        let runtime = create_runtime();
        let server = server();
        server.mock(|when, then| {
            when.method(PATCH).path("/api/calendar/events/7");
            then.status(200).json_body(json!({"message": "updated"}));
        });
        let vm = view_model(&server);
        vm.reload().await;
        let event = vm.events.with_untracked(|list| list[0].clone());

        vm.open_edit(&event);
        assert_eq!(vm.form.title.get_untracked(), "Review");
        vm.form.title.set("Design review".into());
        vm.save().await.unwrap();

        let body = server.last_body(PATCH, "/api/calendar/events/7").unwrap();
        assert_eq!(body["title"], json!("Design review"));
        assert_eq!(body["priority"], json!("High"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_removes_after_confirmation() {
        let runtime = create_runtime();
        let server = server();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/calendar/events/7");
            then.status(200).json_body(json!({"message": "deleted"}));
        });
        let vm = view_model(&server);
        vm.reload().await;
        let event = vm.events.with_untracked(|list| list[0].clone());

        vm.request_delete(event);
        vm.confirm_delete().await.unwrap();

        assert_eq!(server.hits(DELETE, "/api/calendar/events/7"), 1);
        assert!(vm.events.with_untracked(Vec::is_empty));
        runtime.dispose();
    }
}
