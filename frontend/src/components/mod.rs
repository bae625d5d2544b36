pub mod badges;
pub mod clock;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod modal;
pub mod notification_bell;
pub mod search;
pub mod toast;
