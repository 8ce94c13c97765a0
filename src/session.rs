//! The active student session.
//!
//! Exactly one identity may be logged in at a time. The identity is kept in
//! the injected store under [`CURRENT_USER_KEY`] so a session survives a
//! restart and is resumed by [`SessionStore::current_session`].

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::Identity;
use crate::store::{KeyValueStore, CURRENT_USER_KEY};

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Log in as `student_id`, replacing any active session.
    ///
    /// Any non-empty identifier is accepted; there is no authentication.
    pub fn login(&self, student_id: &str) -> Result<Identity> {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return Err(Error::EmptyInput);
        }

        let identity = Identity::new(student_id);
        let json = serde_json::to_string(&identity)?;
        self.store.set(CURRENT_USER_KEY, &json)?;

        tracing::info!(student_id = %identity.id, "Logged in");
        Ok(identity)
    }

    pub fn logout(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<Identity>> {
        active_identity(self.store.as_ref())
    }
}

/// Read the persisted identity. A malformed record reads as logged out.
pub(crate) fn active_identity(store: &dyn KeyValueStore) -> Result<Option<Identity>> {
    let Some(json) = store.get(CURRENT_USER_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Identity>(&json) {
        Ok(identity) if !identity.id.trim().is_empty() => Ok(Some(identity)),
        Ok(_) => {
            tracing::warn!("Ignoring stored session with empty student id");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!("Ignoring malformed stored session: {}", e);
            Ok(None)
        }
    }
}
