use crate::api::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Tasks,
    Attendance,
}

impl ExportKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ExportKind::Tasks => "tasks",
            ExportKind::Attendance => "attendance",
        }
    }
}

/// Label and value pairs for the summary cards.
pub fn summary_cards(stats: &Stats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Projects", stats.total_projects.to_string()),
        ("Total Tasks", stats.total_tasks.to_string()),
        ("Completed Tasks", stats.task_stats.completed.to_string()),
        ("Completion Rate", format!("{}%", stats.task_stats.completion_rate())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TaskStats;

    #[test]
    fn summary_includes_completion_rate() {
        let stats = Stats {
            total_projects: 4,
            total_tasks: 8,
            task_stats: TaskStats {
                todo: 2,
                inprogress: 3,
                completed: 3,
            },
            ..Stats::default()
        };
        let cards = summary_cards(&stats);
        assert_eq!(cards[0], ("Total Projects", "4".to_string()));
        assert_eq!(cards[3], ("Completion Rate", "38%".to_string()));
    }
}
