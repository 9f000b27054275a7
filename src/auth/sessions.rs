use crate::auth::token::{generate_token_default, hash_token};
use crate::store::models::Guest;
use std::collections::HashMap;
use std::sync::Mutex;

/// 7 days, matching how long a sign-in should survive.
const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;
/// The OAuth round trip has to finish within this window.
const LOGIN_STATE_TTL_SECS: i64 = 10 * 60;

/// The identity capability attached to a request. Every ownership check
/// downstream keys off `guest_id`.
#[derive(Debug, Clone)]
pub struct Session {
    pub guest_id: i64,
    pub email: String,
    pub full_name: String,
    pub expires_at: i64,
}

/// In-process session registry keyed by token hash. The raw token only
/// ever exists in the `session` cookie; persistence stays with the
/// hosted store, so sessions do not survive a restart.
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], Session>>,
    // Outstanding OAuth CSRF states, hash -> expiry.
    login_states: Mutex<HashMap<[u8; 32], i64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            login_states: Mutex::new(HashMap::new()),
        }
    }

    /// Open a session for a signed-in guest; returns the raw cookie token.
    pub fn create(&self, guest: &Guest, now: i64) -> String {
        let raw_token = generate_token_default();
        let session = Session {
            guest_id: guest.id,
            email: guest.email.clone(),
            full_name: guest.full_name.clone(),
            expires_at: now + SESSION_TTL_SECS,
        };

        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(hash_token(&raw_token), session);
        raw_token
    }

    /// Look up a cookie token; expired entries are dropped on sight.
    pub fn authenticate(&self, raw_token: &str, now: i64) -> Option<Session> {
        let key = hash_token(raw_token);
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get(&key) {
            Some(s) if s.expires_at > now => Some(s.clone()),
            Some(_) => {
                sessions.remove(&key);
                None
            }
            None => None,
        }
    }

    pub fn revoke(&self, raw_token: &str) {
        self.sessions.lock().unwrap().remove(&hash_token(raw_token));
    }

    /// Issue a single-use CSRF state for the provider redirect.
    pub fn issue_login_state(&self, now: i64) -> String {
        let raw = generate_token_default();
        self.login_states
            .lock()
            .unwrap()
            .insert(hash_token(&raw), now + LOGIN_STATE_TTL_SECS);
        raw
    }

    /// Consume a state returned on the callback; true iff it was ours
    /// and still fresh. Always removed, so a replayed state fails.
    pub fn consume_login_state(&self, raw: &str, now: i64) -> bool {
        let mut states = self.login_states.lock().unwrap();
        match states.remove(&hash_token(raw)) {
            Some(expires_at) => expires_at > now,
            None => false,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
