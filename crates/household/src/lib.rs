pub mod error;
pub mod person;
pub mod roster;

pub use error::{RosterError, RosterResult};
pub use person::{Person, PersonId};
pub use roster::{parse_allergy_csv, AddPersonCommand, Roster};
