use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Row ids arrive as UUID strings or as integers depending on the table.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Member
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl Role {
    /// Stored role strings; members are persisted as "Team Member".
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Team Member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn display_name(&self) -> String {
        let name = self.full_name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        self.email
            .split('@')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("User")
            .to_string()
    }

    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect();
        initials.to_uppercase()
    }
}

/// Compact user embedded in task rows (`assignee:assigned_to(...)`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ProjectStatus::Active => ProjectStatus::Completed,
            ProjectStatus::Completed => ProjectStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProjectStatus,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// To Do → In Progress → Completed → To Do.
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::ToDo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::ToDo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: TaskPriority,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub assignee: Option<UserSummary>,
}

impl Task {
    pub fn project_title(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.title.as_deref())
    }

    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().and_then(|a| a.full_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub project_id: Option<String>,
    pub assigned_to: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub punch_in: Option<String>,
    #[serde(default)]
    pub punch_out: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub punch_out_location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchKind {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<AttendanceRecord>,
    #[serde(rename = "type")]
    pub kind: PunchKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRequest {
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventPriority {
    #[default]
    Normal,
    Medium,
    High,
}

impl EventPriority {
    pub const ALL: [EventPriority; 3] = [
        EventPriority::Normal,
        EventPriority::Medium,
        EventPriority::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventPriority::Normal => "Normal",
            EventPriority::Medium => "Medium",
            EventPriority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventPriority::Normal => "#3b82f6",
            EventPriority::Medium => "#f59e0b",
            EventPriority::High => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reminder {
    SameDay,
    OneDayBefore,
}

impl Reminder {
    pub const ALL: [Reminder; 2] = [Reminder::SameDay, Reminder::OneDayBefore];

    pub fn label(&self) -> &'static str {
        match self {
            Reminder::SameDay => "On the day",
            Reminder::OneDayBefore => "One day before",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(alias = "start")]
    pub start_time: String,
    #[serde(default, alias = "end")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: EventPriority,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, alias = "allDay")]
    pub all_day: bool,
    #[serde(default, alias = "backgroundColor")]
    pub background_color: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl CalendarEvent {
    pub fn color(&self) -> String {
        self.background_color
            .clone()
            .unwrap_or_else(|| self.priority.color().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: EventPriority,
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// `/api/notifications` answers either with an envelope or a bare list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NotificationFeedWire {
    Envelope {
        notifications: Vec<Notification>,
        #[serde(default)]
        unread_count: Option<usize>,
    },
    List(Vec<Notification>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl From<NotificationFeedWire> for NotificationFeed {
    fn from(wire: NotificationFeedWire) -> Self {
        let (notifications, unread_count) = match wire {
            NotificationFeedWire::Envelope {
                notifications,
                unread_count,
            } => (notifications, unread_count),
            NotificationFeedWire::List(notifications) => (notifications, None),
        };
        let unread_count =
            unread_count.unwrap_or_else(|| notifications.iter().filter(|n| !n.is_read).count());
        NotificationFeed {
            notifications,
            unread_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<i64>,
}

impl ChartSeries {
    pub fn points(&self) -> Vec<(String, i64)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.data.iter().copied())
            .collect()
    }

    pub fn max(&self) -> i64 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsCharts {
    #[serde(default)]
    pub status: ChartSeries,
    #[serde(default)]
    pub projects: ChartSeries,
    #[serde(default)]
    pub trend: ChartSeries,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskStats {
    #[serde(default, alias = "To Do")]
    pub todo: i64,
    #[serde(default, alias = "In Progress")]
    pub inprogress: i64,
    #[serde(default, alias = "Completed")]
    pub completed: i64,
}

impl TaskStats {
    pub fn total(&self) -> i64 {
        self.todo + self.inprogress + self.completed
    }

    /// Whole-percent completion, 0 when there are no tasks.
    pub fn completion_rate(&self) -> i64 {
        let total = self.total();
        if total == 0 {
            0
        } else {
            (self.completed * 100 + total / 2) / total
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_projects: i64,
    #[serde(default)]
    pub total_tasks: i64,
    #[serde(default)]
    pub task_stats: TaskStats,
    #[serde(default)]
    pub charts: StatsCharts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InviteRole {
    Admin,
    #[default]
    Member,
}

impl InviteRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteRole::Admin => "Admin",
            InviteRole::Member => "Member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    pub role: InviteRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default = "default_error_code")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Set when `error` is text the server sent rather than one made up locally.
    #[serde(skip)]
    from_server: bool,
}

fn default_error_code() -> String {
    "UNKNOWN".to_string()
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
            from_server: false,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
            from_server: false,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
            from_server: false,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
            from_server: false,
        }
    }

    /// An HTTP failure whose body carried a readable message.
    pub fn from_server(status: u16, msg: impl Into<String>) -> Self {
        Self {
            from_server: true,
            ..Self::http(status, msg)
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        Some(self.error.as_str()).filter(|m| self.from_server && !m.trim().is_empty())
    }

    /// Text for a toast: the server's own message, a local validation
    /// message, or `fallback` for anything else.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.server_message() {
            Some(message) => message.to_string(),
            None if self.code == "VALIDATION_ERROR" => self.error.clone(),
            None => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.code.strip_prefix("HTTP_")?.parse().ok()
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_accepts_stored_and_invite_spellings() {
        let admin: Role = serde_json::from_value(json!("Admin")).unwrap();
        let member: Role = serde_json::from_value(json!("Team Member")).unwrap();
        let short: Role = serde_json::from_value(json!("Member")).unwrap();
        assert_eq!(admin, Role::Admin);
        assert_eq!(member, Role::Member);
        assert_eq!(short, Role::Member);
        assert_eq!(serde_json::to_value(Role::Member).unwrap(), json!("Team Member"));
    }

    #[test]
    fn user_tolerates_null_columns() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "full_name": null,
            "email": "jane.doe@example.com",
            "role": null
        }))
        .unwrap();
        assert_eq!(user.role, Role::Member);
        assert_eq!(user.display_name(), "jane.doe");
        assert_eq!(user.initials(), "J");
    }

    #[test]
    fn initials_use_first_two_words() {
        let user = User {
            id: "u".into(),
            full_name: "ada mary lovelace".into(),
            ..User::default()
        };
        assert_eq!(user.initials(), "AM");
    }

    #[test]
    fn task_status_cycles_through_all_states() {
        assert_eq!(TaskStatus::ToDo.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.next(), TaskStatus::ToDo);
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            json!("In Progress")
        );
    }

    #[test]
    fn task_rows_accept_numeric_ids_and_embedded_relations() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Write report",
            "status": "Completed",
            "priority": "High",
            "project_id": 3,
            "assigned_to": "",
            "project": {"title": "Q3"},
            "assignee": {"full_name": "Ann", "avatar_url": null}
        }))
        .unwrap();
        assert_eq!(task.id, "7");
        assert_eq!(task.project_id.as_deref(), Some("3"));
        assert!(task.assigned_to.is_none());
        assert_eq!(task.project_title(), Some("Q3"));
        assert_eq!(task.assignee_name(), Some("Ann"));
    }

    #[test]
    fn calendar_event_reads_feed_shape() {
        let event: CalendarEvent = serde_json::from_value(json!({
            "id": "t-1",
            "title": "Deadline",
            "start": "2025-03-05",
            "allDay": true,
            "backgroundColor": "#10b981",
            "url": "/projects/3"
        }))
        .unwrap();
        assert_eq!(event.start_time, "2025-03-05");
        assert!(event.all_day);
        assert_eq!(event.color(), "#10b981");
        assert_eq!(event.priority, EventPriority::Normal);
    }

    #[test]
    fn calendar_event_reads_stored_shape() {
        let event: CalendarEvent = serde_json::from_value(json!({
            "id": "e-1",
            "title": "Review",
            "start_time": "2025-03-05T10:00:00Z",
            "end_time": "2025-03-05T11:00:00Z",
            "priority": "High",
            "reminders": ["same_day", "one_day_before"],
            "creator_name": "Ann"
        }))
        .unwrap();
        assert_eq!(event.reminders, vec![Reminder::SameDay, Reminder::OneDayBefore]);
        assert_eq!(event.color(), "#ef4444");
    }

    #[test]
    fn notification_feed_accepts_bare_lists() {
        let wire: NotificationFeedWire = serde_json::from_value(json!([
            {"id": 1, "title": "a", "message": "m", "is_read": false},
            {"id": 2, "title": "b", "message": "m", "is_read": true}
        ]))
        .unwrap();
        let feed = NotificationFeed::from(wire);
        assert_eq!(feed.notifications.len(), 2);
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn notification_feed_prefers_server_unread_count() {
        let wire: NotificationFeedWire = serde_json::from_value(json!({
            "notifications": [{"id": "n1", "title": "a", "message": "m", "is_read": false}],
            "unread_count": 4
        }))
        .unwrap();
        assert_eq!(NotificationFeed::from(wire).unread_count, 4);
    }

    #[test]
    fn task_stats_read_status_keys() {
        let stats: Stats = serde_json::from_value(json!({
            "total_projects": 2,
            "total_tasks": 4,
            "task_stats": {"To Do": 1, "In Progress": 1, "Completed": 2}
        }))
        .unwrap();
        assert_eq!(stats.task_stats.completed, 2);
        assert_eq!(stats.task_stats.completion_rate(), 50);
        assert_eq!(TaskStats::default().completion_rate(), 0);
    }

    #[test]
    fn http_errors_expose_status() {
        let err = ApiError::http(403, "nope");
        assert_eq!(err.status(), Some(403));
        assert!(err.is_forbidden());
        assert_eq!(ApiError::unknown("x").status(), None);
    }

    #[test]
    fn only_server_text_beats_the_fallback() {
        let server = ApiError::from_server(400, "Already punched out for today.");
        assert_eq!(server.server_message(), Some("Already punched out for today."));
        assert_eq!(server.message_or("Error punching"), "Already punched out for today.");

        let bare = ApiError::http(502, "Request failed with status 502");
        assert_eq!(bare.server_message(), None);
        assert_eq!(bare.message_or("Error punching"), "Error punching");

        let offline = ApiError::request_failed("Request failed: error sending request");
        assert_eq!(offline.message_or("Error punching"), "Error punching");

        let invalid = ApiError::validation("Full name is required");
        assert_eq!(invalid.message_or("Error updating profile"), "Full name is required");
    }

    #[test]
    fn task_patch_serializes_only_set_fields() {
        let body = serde_json::to_value(TaskPatch::status(TaskStatus::Completed)).unwrap();
        assert_eq!(body, json!({"status": "Completed"}));
    }
}
