use crate::api::{Project, ProjectRef, Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus, User, UserSummary};
use crate::utils::time::{parse_date, parse_local_input};
use chrono::{Duration, NaiveDate};

pub const PERSONAL_PROJECT: &str = "personal";

/// Case-insensitive match on the task or project title, then status.
pub fn filter_tasks(tasks: &[Task], search: &str, status: Option<TaskStatus>) -> Vec<Task> {
    let needle = search.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            needle.is_empty()
                || task.title.to_lowercase().contains(&needle)
                || task
                    .project_title()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .filter(|task| status.map_or(true, |wanted| task.status == wanted))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineLabel {
    Overdue(NaiveDate),
    Today,
    Tomorrow,
    On(NaiveDate),
}

impl DeadlineLabel {
    pub fn text(&self) -> String {
        match self {
            DeadlineLabel::Overdue(date) => format!("{} (Overdue)", date.format("%b %-d")),
            DeadlineLabel::Today => "Today".to_string(),
            DeadlineLabel::Tomorrow => "Tomorrow".to_string(),
            DeadlineLabel::On(date) => date.format("%b %-d").to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DeadlineLabel::Overdue(_) => "text-status-error-text font-bold",
            DeadlineLabel::Today => "text-status-warning-text font-bold",
            DeadlineLabel::Tomorrow => "text-status-warning-text font-medium",
            DeadlineLabel::On(_) => "text-fg-muted",
        }
    }
}

pub fn deadline_label(deadline: Option<&str>, today: NaiveDate) -> Option<DeadlineLabel> {
    let date = parse_date(deadline?)?;
    Some(if date < today {
        DeadlineLabel::Overdue(date)
    } else if date == today {
        DeadlineLabel::Today
    } else if date == today + Duration::days(1) {
        DeadlineLabel::Tomorrow
    } else {
        DeadlineLabel::On(date)
    })
}

/// Raw values of the create/edit form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskFormValues {
    pub title: String,
    pub description: String,
    /// Empty until chosen; `personal` for tasks outside any project.
    pub project: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub deadline: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl TaskFormValues {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            project: task
                .project_id
                .clone()
                .unwrap_or_else(|| PERSONAL_PROJECT.to_string()),
            assignee: task.assigned_to.clone().unwrap_or_default(),
            priority: task.priority,
            deadline: task
                .deadline
                .as_deref()
                .map(crate::utils::time::to_local_input)
                .unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if self.project.is_empty() {
            return Err("Please select a project".into());
        }
        if !self.deadline.trim().is_empty() && parse_local_input(&self.deadline).is_none() {
            return Err("Deadline is not a valid date".into());
        }
        Ok(())
    }

    fn project_id(&self) -> Option<String> {
        non_empty(&self.project).filter(|p| p != PERSONAL_PROJECT)
    }

    pub fn to_draft(&self) -> Result<TaskDraft, String> {
        self.validate()?;
        Ok(TaskDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            project_id: self.project_id(),
            assigned_to: non_empty(&self.assignee),
            deadline: non_empty(&self.deadline),
        })
    }

    pub fn to_patch(&self) -> Result<TaskPatch, String> {
        self.validate()?;
        Ok(TaskPatch {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            priority: Some(self.priority),
            project_id: self.project_id(),
            assigned_to: non_empty(&self.assignee),
            deadline: non_empty(&self.deadline),
            status: None,
        })
    }
}

/// Folds a saved patch into the local row, refreshing the embedded
/// project title and assignee from the loaded lists.
pub fn apply_patch(task: &mut Task, patch: &TaskPatch, projects: &[Project], team: &[User]) {
    if let Some(title) = &patch.title {
        task.title = title.clone();
    }
    if let Some(description) = &patch.description {
        task.description = Some(description.clone());
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if patch.deadline.is_some() {
        task.deadline = patch.deadline.clone();
    }
    if let Some(project_id) = &patch.project_id {
        task.project_id = Some(project_id.clone());
        if let Some(project) = projects.iter().find(|p| &p.id == project_id) {
            task.project = Some(ProjectRef {
                title: Some(project.title.clone()),
            });
        }
    }
    if let Some(user_id) = &patch.assigned_to {
        task.assigned_to = Some(user_id.clone());
        if let Some(member) = team.iter().find(|m| &m.id == user_id) {
            task.assignee = Some(UserSummary {
                full_name: Some(member.display_name()),
                avatar_url: member.avatar_url.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, status: TaskStatus, project: Option<&str>) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            status,
            project: project.map(|t| ProjectRef {
                title: Some(t.into()),
            }),
            ..Task::default()
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Write brief", TaskStatus::ToDo, Some("Website")),
            task("2", "Ship release", TaskStatus::Completed, Some("Mobile App")),
            task("3", "Review copy", TaskStatus::InProgress, None),
            task("4", "Launch website", TaskStatus::Completed, None),
        ]
    }

    #[test]
    fn completed_filter_returns_only_completed_tasks() {
        let filtered = filter_tasks(&sample(), "", Some(TaskStatus::Completed));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.status == TaskStatus::Completed));
    }

    #[test]
    fn search_matches_title_or_project_title() {
        let ids: Vec<_> = filter_tasks(&sample(), "WEBSITE", None)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
        let combined = filter_tasks(&sample(), "website", Some(TaskStatus::ToDo));
        assert_eq!(combined.len(), 1);
        assert_eq!(filter_tasks(&sample(), "  ", None).len(), 4);
    }

    #[test]
    fn deadline_labels_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(
            deadline_label(Some("2025-03-09"), today),
            NaiveDate::from_ymd_opt(2025, 3, 9).map(DeadlineLabel::Overdue)
        );
        assert_eq!(deadline_label(Some("2025-03-10T18:00"), today), Some(DeadlineLabel::Today));
        assert_eq!(deadline_label(Some("2025-03-11"), today), Some(DeadlineLabel::Tomorrow));
        assert_eq!(
            deadline_label(Some("2025-03-20"), today).map(|l| l.text()),
            Some("Mar 20".to_string())
        );
        assert_eq!(deadline_label(None, today), None);
        assert_eq!(
            deadline_label(Some("2025-03-01"), today).map(|l| l.text()),
            Some("Mar 1 (Overdue)".to_string())
        );
    }

    #[test]
    fn form_requires_title_and_project() {
        let mut values = TaskFormValues::default();
        assert_eq!(values.to_draft().unwrap_err(), "Title is required");
        values.title = "Plan sprint".into();
        assert_eq!(values.to_draft().unwrap_err(), "Please select a project");
        values.project = PERSONAL_PROJECT.into();
        let draft = values.to_draft().unwrap();
        assert_eq!(draft.project_id, None);
        assert_eq!(draft.assigned_to, None);
        assert_eq!(draft.priority, TaskPriority::Medium);
    }

    #[test]
    fn form_keeps_project_and_deadline() {
        let values = TaskFormValues {
            title: " Plan ".into(),
            project: "p-1".into(),
            assignee: "u-1".into(),
            deadline: "2025-03-10T09:30".into(),
            ..TaskFormValues::default()
        };
        let draft = values.to_draft().unwrap();
        assert_eq!(draft.title, "Plan");
        assert_eq!(draft.project_id.as_deref(), Some("p-1"));
        assert_eq!(draft.deadline.as_deref(), Some("2025-03-10T09:30"));

        let bad = TaskFormValues {
            deadline: "tomorrow".into(),
            ..values
        };
        assert!(bad.to_patch().is_err());
    }

    #[test]
    fn patch_refreshes_embedded_names() {
        let mut row = task("1", "Old", TaskStatus::ToDo, Some("Website"));
        let projects = vec![Project {
            id: "p-2".into(),
            title: "Mobile App".into(),
            ..Project::default()
        }];
        let team = vec![User {
            id: "u-2".into(),
            full_name: "Bo Builder".into(),
            ..User::default()
        }];
        let patch = TaskPatch {
            title: Some("New".into()),
            project_id: Some("p-2".into()),
            assigned_to: Some("u-2".into()),
            ..TaskPatch::default()
        };
        apply_patch(&mut row, &patch, &projects, &team);
        assert_eq!(row.title, "New");
        assert_eq!(row.project_title(), Some("Mobile App"));
        assert_eq!(row.assignee_name(), Some("Bo Builder"));
    }
}
