use async_trait::async_trait;

use crate::error::Error;
use crate::models::auth::AuthRequest;
use crate::models::user::User;

/// Every verification strategy (local database, directory service, token
/// issuer, ...) must implement this.
///
/// `Ok(Some(user))` => credentials verified, identity resolved.
/// `Ok(None)`       => credentials declined (no such user or bad secret).
/// `Err(e)`         => the strategy itself failed, e.g. backend unreachable.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Option<User>, Error>;
}

/// Source of the configured authentication mode name.
#[async_trait]
pub trait AuthModeProvider: Send + Sync {
    async fn auth_mode(&self) -> Result<String, Error>;
}

/// Fixed-mode provider for tests and deployments without a settings store.
pub struct StaticAuthMode(pub String);

#[async_trait]
impl AuthModeProvider for StaticAuthMode {
    async fn auth_mode(&self) -> Result<String, Error> {
        Ok(self.0.clone())
    }
}
