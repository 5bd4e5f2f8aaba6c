//! Server-side session registry.
//!
//! Tokens are server-generated opaque UUIDs mapped to a phone number in
//! process memory, with a TTL enforced on resolve. The cookie value
//! proves nothing by itself; identity lives on this side. Sessions do
//! not survive a restart.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone)]
struct Session {
    phone: String,
    expires_at: DateTime<Utc>,
}

pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        SessionStore {
            ttl: Duration::seconds(ttl_secs as i64),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issues a fresh token for `phone`. Expired entries are dropped
    /// while the write lock is held.
    pub async fn create(&self, phone: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            token.clone(),
            Session {
                phone: phone.to_string(),
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Maps a token back to its phone number. An unknown or expired
    /// token resolves to `None`; expired entries are removed.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.phone.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Invalidates a token. Unknown tokens are a no-op.
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}
