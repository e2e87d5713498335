// authgate-core/src/auth/login.rs
//
// The single entry point for login attempts: resolves the active mode,
// dispatches to the registered strategy, and applies the per-principal
// freeze on declined credentials.

use std::sync::Arc;

use tracing::debug;

use authgate_common::error::Error;
use authgate_common::models::auth::{AuthOutcome, AuthRequest};
use authgate_common::models::user::User;
use authgate_common::traits::auth_traits::AuthModeProvider;

use crate::auth::lockout::UserLock;
use crate::auth::registry::AuthenticatorRegistry;
use crate::auth::{DB_AUTH_MODE, SUPERUSER_PRINCIPAL};

pub struct LoginService {
    registry: Arc<AuthenticatorRegistry>,
    lock: Arc<UserLock>,
    mode_provider: Arc<dyn AuthModeProvider>,
}

impl LoginService {
    pub fn new(
        registry: Arc<AuthenticatorRegistry>,
        lock: Arc<UserLock>,
        mode_provider: Arc<dyn AuthModeProvider>,
    ) -> Self {
        Self {
            registry,
            lock,
            mode_provider,
        }
    }

    pub fn user_lock(&self) -> Arc<UserLock> {
        Arc::clone(&self.lock)
    }

    /// Authenticates the request against the configured strategy.
    ///
    /// `Ok(Some(user))` on success. `Ok(None)` when the credential is
    /// declined OR the principal is currently frozen; the two are
    /// deliberately indistinguishable to the caller. Every declined
    /// attempt arms the freeze and pays the full freeze span in latency
    /// before returning, so a guesser cannot go faster than the penalty
    /// no matter how quickly the strategy answered.
    pub async fn login(&self, request: AuthRequest) -> Result<Option<User>, Error> {
        let mut auth_mode = self.mode_provider.auth_mode().await?;
        if auth_mode.is_empty() || request.principal == SUPERUSER_PRINCIPAL {
            auth_mode = DB_AUTH_MODE.to_string();
        }
        debug!("current auth mode is {}", auth_mode);

        let authenticator = self
            .registry
            .resolve(&auth_mode)
            .ok_or_else(|| Error::UnrecognizedMode(auth_mode.clone()))?;

        // The strategy is only invoked for unfrozen principals; a frozen
        // one short-circuits to the declined-shaped outcome.
        let outcome = if self.lock.is_locked(&request.principal) {
            debug!(
                "{} is locked due to login failure, login failed",
                request.principal
            );
            AuthOutcome::Locked
        } else {
            match authenticator.authenticate(&request).await? {
                Some(user) => AuthOutcome::Success(user),
                None => AuthOutcome::Declined,
            }
        };

        match outcome {
            AuthOutcome::Success(user) => Ok(Some(user)),
            AuthOutcome::Declined => {
                debug!(
                    "login failed, locking {} and delaying for {:?}",
                    request.principal,
                    self.lock.freeze()
                );
                self.lock.lock(&request.principal);
                // Suspends only this attempt; no map guard is held across
                // the await. A cancelled caller leaves the armed lock as is.
                tokio::time::sleep(self.lock.freeze()).await;
                Ok(None)
            }
            AuthOutcome::Locked => Ok(None),
        }
    }
}
