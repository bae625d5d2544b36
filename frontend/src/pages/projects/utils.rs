use crate::api::{Project, ProjectDraft, ProjectStatus};
use crate::utils::time::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Active,
    Completed,
    All,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::Active, StatusFilter::Completed, StatusFilter::All];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
            StatusFilter::All => "All",
        }
    }

    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::Active => status == ProjectStatus::Active,
            StatusFilter::Completed => status == ProjectStatus::Completed,
            StatusFilter::All => true,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: StatusFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p.status))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectFormValues {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub members: Vec<String>,
}

impl ProjectFormValues {
    pub fn to_draft(&self) -> Result<ProjectDraft, String> {
        let title = self.title.trim();
        if title.is_empty() || self.start_date.is_empty() || self.end_date.is_empty() {
            return Err("Please fill in all required fields".into());
        }
        let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date)) else {
            return Err("Please enter valid dates".into());
        };
        if end < start {
            return Err("End date must be on or after the start date".into());
        }
        Ok(ProjectDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            members: self.members.clone(),
        })
    }
}

pub fn toggle_member(members: &mut Vec<String>, user_id: &str) {
    if let Some(pos) = members.iter().position(|id| id == user_id) {
        members.remove(pos);
    } else {
        members.push(user_id.to_string());
    }
}
