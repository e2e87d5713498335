// src/lib.rs

pub mod auth;
pub mod tasks;

pub use authgate_common::error::Error;
pub use auth::{AuthenticatorRegistry, LoginService, UserLock};
