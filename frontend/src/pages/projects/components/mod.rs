pub mod card;
pub mod form;

pub use card::ProjectCard;
pub use form::ProjectForm;
