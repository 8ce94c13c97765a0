//! Per-student card storage.
//!
//! Each student's cards live in a single `idCards_<id>` record. Writes rewrite
//! the whole record. Reads and writes only go through for the student who is
//! currently logged in; for anyone else they behave as if nothing is stored.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{CardKind, CardSet};
use crate::session::active_identity;
use crate::store::{cards_key, KeyValueStore};

#[derive(Clone)]
pub struct CardStore {
    store: Arc<dyn KeyValueStore>,
}

impl CardStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Upsert one card for `identity_id`.
    ///
    /// Does nothing unless `identity_id` is the active session's student.
    pub fn put(&self, identity_id: &str, kind: CardKind, payload: &str) -> Result<()> {
        if !self.is_active(identity_id)? {
            tracing::debug!(
                student_id = identity_id,
                kind = kind.as_str(),
                "Skipping card save without a matching session"
            );
            return Ok(());
        }

        let key = cards_key(identity_id);
        let mut cards = self.read_record(&key)?;
        cards.set(kind, payload);
        self.store.set(&key, &serde_json::to_string(&cards)?)?;

        tracing::info!(student_id = identity_id, kind = kind.as_str(), "Saved card");
        Ok(())
    }

    pub fn get(&self, identity_id: &str, kind: CardKind) -> Result<Option<String>> {
        let cards = self.get_all(identity_id)?;
        Ok(cards.get(kind).map(str::to_string))
    }

    pub fn get_all(&self, identity_id: &str) -> Result<CardSet> {
        if !self.is_active(identity_id)? {
            return Ok(CardSet::default());
        }
        self.read_record(&cards_key(identity_id))
    }

    fn is_active(&self, identity_id: &str) -> Result<bool> {
        let active = active_identity(self.store.as_ref())?;
        Ok(active.is_some_and(|identity| identity.id == identity_id))
    }

    /// Absent or malformed records read as an empty set, blank payloads as absent.
    fn read_record(&self, key: &str) -> Result<CardSet> {
        let Some(json) = self.store.get(key)? else {
            return Ok(CardSet::default());
        };

        match serde_json::from_str::<Option<CardSet>>(&json) {
            Ok(cards) => Ok(cards.unwrap_or_default().without_blank()),
            Err(e) => {
                tracing::warn!(key, "Ignoring malformed card record: {}", e);
                Ok(CardSet::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::store::MemoryStore;

    fn setup() -> (MemoryStore, SessionStore, CardStore) {
        let store = MemoryStore::new();
        let shared: Arc<dyn KeyValueStore> = Arc::new(store.clone());
        (
            store,
            SessionStore::new(Arc::clone(&shared)),
            CardStore::new(shared),
        )
    }

    #[test]
    fn test_put_writes_whole_record() {
        let (store, sessions, cards) = setup();
        sessions.login("42").unwrap();
        cards.put("42", CardKind::Dorm, "data:a").unwrap();
        cards.put("42", CardKind::Gym, "data:b").unwrap();

        assert_eq!(
            store.get("idCards_42").unwrap().as_deref(),
            Some(r#"{"dorm":"data:a","gym":"data:b"}"#)
        );
    }

    #[test]
    fn test_put_for_inactive_identity_is_ignored() {
        let (store, sessions, cards) = setup();
        sessions.login("42").unwrap();
        cards.put("7", CardKind::Dorm, "data:a").unwrap();

        assert_eq!(store.get("idCards_7").unwrap(), None);
    }

    #[test]
    fn test_malformed_record_reads_empty_and_is_replaced() {
        let (store, sessions, cards) = setup();
        sessions.login("42").unwrap();
        store.set("idCards_42", "[1, 2").unwrap();

        assert!(cards.get_all("42").unwrap().is_empty());

        cards.put("42", CardKind::Library, "data:l").unwrap();
        assert_eq!(
            cards.get("42", CardKind::Library).unwrap().as_deref(),
            Some("data:l")
        );
    }

    #[test]
    fn test_blank_payload_reads_as_absent() {
        let (store, sessions, cards) = setup();
        sessions.login("42").unwrap();
        store.set("idCards_42", r#"{"dorm":"","gym":"data:g"}"#).unwrap();

        let all = cards.get_all("42").unwrap();
        assert!(!all.contains(CardKind::Dorm));
        assert_eq!(cards.get("42", CardKind::Dorm).unwrap(), None);
        assert_eq!(all.get(CardKind::Gym), Some("data:g"));
    }

    #[test]
    fn test_null_record_reads_empty() {
        let (store, sessions, cards) = setup();
        sessions.login("42").unwrap();
        store.set("idCards_42", "null").unwrap();

        assert!(cards.get_all("42").unwrap().is_empty());
    }
}
