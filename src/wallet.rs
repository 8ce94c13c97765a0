//! User-action layer over the session and card stores.
//!
//! Each method corresponds to one thing a student does: open the app, log in,
//! save a card, look at their cards, log out.

use std::sync::Arc;

use crate::cards::CardStore;
use crate::error::{Error, Result};
use crate::models::{CardKind, CardSet, Identity};
use crate::session::SessionStore;
use crate::store::KeyValueStore;

/// What a logged-in student sees: who they are and their stored cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub identity: Identity,
    pub cards: CardSet,
}

#[derive(Clone)]
pub struct Wallet {
    sessions: SessionStore,
    cards: CardStore,
}

impl Wallet {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            sessions: SessionStore::new(Arc::clone(&store)),
            cards: CardStore::new(store),
        }
    }

    /// Pick up a session left over from a previous run.
    pub fn resume(&self) -> Result<Option<Dashboard>> {
        match self.sessions.current_session()? {
            Some(identity) => self.dashboard(identity).map(Some),
            None => Ok(None),
        }
    }

    pub fn login(&self, student_id: &str) -> Result<Dashboard> {
        let identity = self.sessions.login(student_id)?;
        self.dashboard(identity)
    }

    pub fn logout(&self) -> Result<()> {
        self.sessions.logout()
    }

    /// Save the selected image as the active student's `kind` card.
    ///
    /// `selection` is the chosen image as a data URI; `None` or blank means
    /// nothing was chosen.
    pub fn save_card(&self, kind: CardKind, selection: Option<&str>) -> Result<Identity> {
        let payload = selection
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(Error::NoImageSelected(kind))?;

        let identity = self
            .sessions
            .current_session()?
            .ok_or(Error::NotLoggedIn)?;

        self.cards.put(&identity.id, kind, payload)?;
        Ok(identity)
    }

    /// Cards of the active student, empty when logged out.
    pub fn cards(&self) -> Result<CardSet> {
        match self.sessions.current_session()? {
            Some(identity) => self.cards.get_all(&identity.id),
            None => Ok(CardSet::default()),
        }
    }

    pub fn card(&self, kind: CardKind) -> Result<Option<String>> {
        let identity = self
            .sessions
            .current_session()?
            .ok_or(Error::NotLoggedIn)?;
        self.cards.get(&identity.id, kind)
    }

    fn dashboard(&self, identity: Identity) -> Result<Dashboard> {
        let cards = self.cards.get_all(&identity.id)?;
        Ok(Dashboard { identity, cards })
    }
}
