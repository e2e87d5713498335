use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity record a verification strategy resolves on success.
/// Ownership transfers to the caller of `login`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub realname: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            username: username.to_string(),
            email: None,
            realname: None,
            is_admin: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }
}
