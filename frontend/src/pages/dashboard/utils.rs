use crate::api::{Stats, Task, TaskStatus, User};
use crate::utils::time::{greeting_for_hour, parse_date};
use chrono::NaiveDate;

/// Tasks ordered by deadline with undated ones last, cut to `limit`.
pub fn upcoming_tasks(mut tasks: Vec<Task>, limit: usize) -> Vec<Task> {
    tasks.sort_by_key(|task| {
        let deadline: Option<NaiveDate> = task.deadline.as_deref().and_then(parse_date);
        (deadline.is_none(), deadline)
    });
    tasks.truncate(limit);
    tasks
}

pub fn greeting(hour: u32, user: Option<&User>) -> String {
    let name = user
        .map(|u| u.display_name())
        .unwrap_or_else(|| "Member".to_string());
    format!("{}, {}", greeting_for_hour(hour), name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCardValue {
    pub label: &'static str,
    pub value: i64,
}

pub fn stat_cards(stats: &Stats, is_admin: bool) -> Vec<StatCardValue> {
    let counts = &stats.task_stats;
    vec![
        StatCardValue {
            label: if is_admin { "Managed Projects" } else { "My Projects" },
            value: stats.total_projects,
        },
        StatCardValue {
            label: if is_admin { "Total Tasks" } else { "My Tasks" },
            value: stats.total_tasks,
        },
        StatCardValue {
            label: "Open Tasks",
            value: counts.todo + counts.inprogress,
        },
        StatCardValue {
            label: "Completed",
            value: counts.completed,
        },
    ]
}

/// Status distribution; falls back to the task counters when the backend
/// sends no status chart.
pub fn status_points(stats: &Stats) -> Vec<(String, i64)> {
    let chart = stats.charts.status.points();
    if !chart.is_empty() {
        return chart;
    }
    let counts = &stats.task_stats;
    TaskStatus::ALL
        .into_iter()
        .zip([counts.todo, counts.inprogress, counts.completed])
        .map(|(status, value)| (status.as_str().to_string(), value))
        .collect()
}

pub fn trend_total(stats: &Stats) -> i64 {
    stats.charts.trend.data.iter().sum()
}
