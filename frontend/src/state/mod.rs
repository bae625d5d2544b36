pub mod attendance;
pub mod auth;
pub mod notifications;
pub mod toast;
