pub mod details;
pub mod form;
pub mod grid;

pub use details::EventDetails;
pub use form::EventFormFields;
pub use grid::MonthGrid;
