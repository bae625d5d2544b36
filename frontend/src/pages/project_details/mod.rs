mod components;
mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::ProjectDetailsPage;
