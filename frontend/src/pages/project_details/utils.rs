use crate::api::{Task, TaskStatus, User};

/// Board columns in workflow order.
pub fn board_columns(tasks: &[Task]) -> Vec<(TaskStatus, Vec<Task>)> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| {
            let column = tasks.iter().filter(|t| t.status == status).cloned().collect();
            (status, column)
        })
        .collect()
}

/// Team members who are not on the project yet.
pub fn addable_members(team: &[User], members: &[User]) -> Vec<User> {
    team.iter()
        .filter(|user| !members.iter().any(|m| m.id == user.id))
        .cloned()
        .collect()
}

pub fn move_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::ToDo => "Start",
        TaskStatus::InProgress => "Complete",
        TaskStatus::Completed => "Reopen",
    }
}
