use thiserror::Error;

use crate::models::CardKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the wallet and its stores.
///
/// The first group are user-facing rejections that leave state untouched.
/// The rest come from the backing medium.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter your student ID")]
    EmptyInput,

    #[error("Please log in first")]
    NotLoggedIn,

    #[error("Please select an image for your {0} first")]
    NoImageSelected(CardKind),

    #[error("Unknown card kind: {0}")]
    UnknownCardKind(String),

    #[error("Invalid data URI")]
    InvalidDataUri,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a rejection of user input rather than a storage failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::NotLoggedIn
                | Self::NoImageSelected(_)
                | Self::UnknownCardKind(_)
                | Self::InvalidDataUri
        )
    }
}
