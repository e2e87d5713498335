// File: authgate-common/src/traits/mod.rs
pub mod auth_traits;

pub use auth_traits::{AuthModeProvider, Authenticator, StaticAuthMode};
