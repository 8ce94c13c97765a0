use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of ID card an image represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Dorm,
    Library,
    Gym,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [Self::Dorm, Self::Library, Self::Gym];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dorm => "dorm",
            Self::Library => "library",
            Self::Gym => "gym",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dorm" => Some(Self::Dorm),
            "library" => Some(Self::Library),
            "gym" => Some(Self::Gym),
            _ => None,
        }
    }

    /// Label shown to the student, e.g. `Dorm ID`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dorm => "Dorm ID",
            Self::Library => "Library ID",
            Self::Gym => "Gym ID",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for CardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardKind::from_str(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| Error::UnknownCardKind(s.to_string()))
    }
}

/// Card images stored for one student, each a data URI.
///
/// Any subset of the three kinds may be present. Absent kinds are omitted
/// from the serialized form rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dorm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gym: Option<String>,
}

impl CardSet {
    pub fn get(&self, kind: CardKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Replace the payload for `kind`, leaving the other kinds untouched.
    pub fn set(&mut self, kind: CardKind, payload: impl Into<String>) {
        *self.slot_mut(kind) = Some(payload.into());
    }

    /// Drop kinds whose payload is blank; an empty string is not a card.
    pub fn without_blank(mut self) -> Self {
        for kind in CardKind::ALL {
            let slot = self.slot_mut(kind);
            if slot.as_deref().is_some_and(|payload| payload.trim().is_empty()) {
                *slot = None;
            }
        }
        self
    }

    pub fn contains(&self, kind: CardKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn is_empty(&self) -> bool {
        CardKind::ALL.iter().all(|kind| !self.contains(*kind))
    }

    /// Present cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, &str)> {
        CardKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|payload| (kind, payload)))
    }

    fn slot(&self, kind: CardKind) -> &Option<String> {
        match kind {
            CardKind::Dorm => &self.dorm,
            CardKind::Library => &self.library,
            CardKind::Gym => &self.gym,
        }
    }

    fn slot_mut(&mut self, kind: CardKind) -> &mut Option<String> {
        match kind {
            CardKind::Dorm => &mut self.dorm,
            CardKind::Library => &mut self.library,
            CardKind::Gym => &mut self.gym,
        }
    }
}
