// =============================================================================
// authgate-core/src/auth/mod.rs
// =============================================================================

use std::time::Duration;

pub mod lockout;
pub mod login;
pub mod registry;

pub use lockout::UserLock;
pub use login::LoginService;
pub use registry::AuthenticatorRegistry;

/// Mode name of the built-in local-database strategy. The superuser
/// override and the empty-mode fallback both route here.
pub const DB_AUTH_MODE: &str = "db_auth";

/// The reserved superuser principal always authenticates against
/// `DB_AUTH_MODE`, so the account stays recoverable when an external
/// identity provider is misconfigured or down.
pub const SUPERUSER_PRINCIPAL: &str = "admin";

/// 1.5 seconds
pub const DEFAULT_FREEZE: Duration = Duration::from_millis(1500);
