// File: authgate-common/src/models/mod.rs
pub mod auth;
pub mod user;

pub use auth::{AuthOutcome, AuthRequest};
pub use user::User;
