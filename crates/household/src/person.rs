use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Opaque identifier for a roster member.
///
/// ULID-backed so that two people may share a display name without
/// colliding; the roster never reuses or recycles an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub(crate) fn generate() -> Self {
        PersonId(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A family member.
///
/// Allergies constrain the random suggestion; likes feed the favorites
/// lottery. Both are sets: duplicates collapse silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    allergies: BTreeSet<String>,
    likes: BTreeSet<String>,
}

impl Person {
    pub(crate) fn new(name: String, allergies: BTreeSet<String>) -> Self {
        Person {
            id: PersonId::generate(),
            name,
            allergies,
            likes: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allergy tokens as entered (trimmed). Matching against ingredients is
    /// case-insensitive and happens at suggestion time, not here.
    pub fn allergies(&self) -> &BTreeSet<String> {
        &self.allergies
    }

    /// Dish names this person marked as favorites.
    ///
    /// Entries are not checked against the catalog; a name that no longer
    /// matches any dish is skipped by the lottery.
    pub fn likes(&self) -> &BTreeSet<String> {
        &self.likes
    }

    pub fn likes_dish(&self, dish_name: &str) -> bool {
        self.likes.contains(dish_name)
    }

    /// Whether the favorites lottery has anything to draw from.
    pub fn has_favorites(&self) -> bool {
        !self.likes.is_empty()
    }

    /// Flip `dish_name` in the liked set; returns whether it is liked after
    /// the call.
    pub(crate) fn toggle_like(&mut self, dish_name: &str) -> bool {
        if self.likes.remove(dish_name) {
            false
        } else {
            self.likes.insert(dish_name.to_string());
            true
        }
    }
}
