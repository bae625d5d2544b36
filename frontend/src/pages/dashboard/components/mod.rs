pub mod charts;
pub mod my_tasks;
pub mod summary;

pub use charts::ChartsSection;
pub use my_tasks::MyTasksSection;
pub use summary::SummarySection;
