pub mod details;
pub mod filters;
pub mod form;
pub mod table;

pub use details::{TaskDetails, TaskDetailsModal};
pub use filters::TaskFilters;
pub use form::TaskFormFields;
pub use table::TaskTable;
