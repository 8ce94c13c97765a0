//! Domain models for the ID card wallet.
//!
//! - [`Identity`]: the logged-in student. At most one is active at a time.
//! - [`CardKind`]: which card an image represents (dorm, library or gym).
//! - [`CardSet`]: the up-to-three card images stored for one student. Card
//!   sets outlive sessions and reappear on the next login with the same id.

mod card;
mod identity;

pub use card::*;
pub use identity::*;
