use crate::models::user::User;

/// One inbound login attempt. Immutable once constructed; the credential
/// is opaque to the dispatch layer and only interpreted by strategies.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub principal: String,
    pub credential: String,
    /// Client address, recorded for diagnostics only.
    pub client_ip: Option<String>,
}

impl AuthRequest {
    pub fn new(principal: &str, credential: &str) -> Self {
        Self {
            principal: principal.to_string(),
            credential: credential.to_string(),
            client_ip: None,
        }
    }

    pub fn with_client_ip(mut self, ip: &str) -> Self {
        self.client_ip = Some(ip.to_string());
        self
    }
}

/// Internal tri-state outcome of an attempt. `Declined` and `Locked` are
/// collapsed into the same caller-visible result at the `login` boundary
/// so a probe cannot tell a lockout apart from a bad credential.
#[derive(Debug)]
pub enum AuthOutcome {
    Success(User),
    Declined,
    Locked,
}
