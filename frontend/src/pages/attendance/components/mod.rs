pub mod confirm;
pub mod history;
pub mod status;

pub use confirm::LocationConfirmDialog;
pub use history::HistoryTable;
pub use status::TodayCard;
