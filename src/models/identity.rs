use serde::{Deserialize, Serialize};

/// The logged-in student.
///
/// `name` is a display label derived from `id`; there is no directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
}

impl Identity {
    /// Build an identity from an already trimmed, non-empty student id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = format!("Student {}", id);
        Self { id, name }
    }
}
