use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::error::{RosterError, RosterResult};
use crate::person::{Person, PersonId};

/// Input for adding a family member.
///
/// `allergies` is the raw comma-separated field exactly as the user typed
/// it; parsing happens inside [`Roster::add`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddPersonCommand {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default)]
    pub allergies: String,
}

impl AddPersonCommand {
    pub fn new(name: impl Into<String>, allergies: impl Into<String>) -> Self {
        AddPersonCommand {
            name: name.into(),
            allergies: allergies.into(),
        }
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Split a raw allergy field on commas, trimming tokens and dropping empty
/// ones. Duplicates collapse silently (set semantics).
///
/// Only the ASCII comma separates tokens; the Persian comma is left alone.
pub fn parse_allergy_csv(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// The family roster, in insertion order. People are never removed.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Add a family member and return a reference to the stored entry.
    ///
    /// The name is trimmed; a name that is blank after trimming is rejected
    /// with [`RosterError::Validation`] and the roster is left unchanged.
    /// Name collisions are allowed; identity is the generated [`PersonId`].
    pub fn add(&mut self, command: AddPersonCommand) -> RosterResult<&Person> {
        command
            .validate()
            .map_err(|e| RosterError::Validation(e.to_string()))?;

        let allergies = parse_allergy_csv(&command.allergies);
        let index = self.people.len();
        self.people
            .push(Person::new(command.name.trim().to_string(), allergies));

        let person = &self.people[index];
        debug!(
            id = %person.id(),
            name = person.name(),
            allergies = person.allergies().len(),
            "person added to roster"
        );
        Ok(person)
    }

    /// All members in insertion order.
    pub fn list_all(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id() == id)
    }

    /// Toggle `dish_name` in the person's liked set and return whether the
    /// dish is liked after the call.
    ///
    /// Toggling twice restores the original state. The dish name is not
    /// checked against any catalog here.
    pub fn toggle_like(&mut self, id: &PersonId, dish_name: &str) -> RosterResult<bool> {
        let person = self
            .people
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| RosterError::PersonNotFound(id.to_string()))?;

        let liked = person.toggle_like(dish_name);
        debug!(id = %id, dish = dish_name, liked, "toggled favorite");
        Ok(liked)
    }
}
