//! Client side of the hosted identity provider: password and OAuth sign-in,
//! the persisted session, and the `users` profile row.

mod client;
pub mod session;

pub use client::{IdentityClient, LoginRequest};
pub use session::{IdentitySession, IdentityUser};

/// Shown when the backend or the profile table does not know the account.
pub const INVITE_REQUIRED_MESSAGE: &str = "Invalid credential, ask your admin to invite you.";
