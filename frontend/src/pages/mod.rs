pub mod attendance;
pub mod calendar;
pub mod dashboard;
pub mod login;
pub mod project_details;
pub mod projects;
pub mod reports;
pub mod settings;
pub mod tasks;
pub mod team;
