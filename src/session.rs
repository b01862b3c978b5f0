use rand::Rng;
use sofreh_household::{AddPersonCommand, Person, PersonId, Roster, RosterError};
use sofreh_kitchen::{Catalog, Dish, SuggestMode};
use sofreh_shopping::ShoppingList;
use tracing::info;

use crate::error::{SessionError, SessionResult};

/// A change that happened inside a [`Session`].
///
/// Emitted to registered observers after the underlying mutation has
/// succeeded; failed operations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    PersonAdded { id: PersonId, name: String },
    PersonSelected { id: Option<PersonId> },
    LikeToggled { id: PersonId, dish: String, liked: bool },
    DishSuggested { mode: SuggestMode, dish: String },
    SuggestionAccepted { dish: String, items: usize },
}

/// Process-wide session binding the catalog, the family roster and the
/// shopping list together.
///
/// State lives in memory for the lifetime of the session and is gone when
/// it drops. Selection and suggestion are two independent optionals; any
/// person may be selected at any time, any dish suggested at any time.
pub struct Session {
    catalog: Catalog,
    roster: Roster,
    shopping: ShoppingList,
    selected: Option<PersonId>,
    suggestion: Option<Dish>,
    observers: Vec<Box<dyn FnMut(&SessionEvent)>>,
}

fn notify(observers: &mut [Box<dyn FnMut(&SessionEvent)>], event: &SessionEvent) {
    for observer in observers.iter_mut() {
        observer(event);
    }
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            roster: Roster::new(),
            shopping: ShoppingList::new(),
            selected: None,
            suggestion: None,
            observers: Vec::new(),
        }
    }

    /// Session over the built-in dish catalog.
    pub fn seeded() -> Self {
        Session::new(Catalog::seed())
    }

    /// Registers an observer called once per successful mutation.
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Adds a family member to the roster.
    ///
    /// # Errors
    ///
    /// [`RosterError::Validation`] via [`SessionError::Roster`] when the
    /// name is blank; the roster stays unchanged.
    pub fn add_person(&mut self, name: &str, allergies_csv: &str) -> SessionResult<PersonId> {
        let person = self.roster.add(AddPersonCommand::new(name, allergies_csv))?;
        let id = person.id().clone();
        let event = SessionEvent::PersonAdded {
            id: id.clone(),
            name: person.name().to_string(),
        };
        notify(&mut self.observers, &event);
        Ok(id)
    }

    /// Selects the person suggestions are made for, or clears the
    /// selection with `None`.
    ///
    /// # Errors
    ///
    /// [`RosterError::PersonNotFound`] via [`SessionError::Roster`] for an
    /// id the roster does not know.
    pub fn select_person(&mut self, id: Option<PersonId>) -> SessionResult<()> {
        if let Some(id) = &id {
            if self.roster.get(id).is_none() {
                return Err(SessionError::Roster(RosterError::PersonNotFound(
                    id.to_string(),
                )));
            }
        }
        self.selected = id;
        let event = SessionEvent::PersonSelected {
            id: self.selected.clone(),
        };
        notify(&mut self.observers, &event);
        Ok(())
    }

    pub fn selected_person(&self) -> Option<&Person> {
        self.selected.as_ref().and_then(|id| self.roster.get(id))
    }

    /// Allergy-aware random suggestion for the selected person (or the
    /// whole catalog when nobody is selected). The pick is stored as the
    /// current suggestion.
    pub fn suggest_random<R>(&mut self, rng: &mut R) -> SessionResult<&Dish>
    where
        R: Rng + ?Sized,
    {
        let dish = sofreh_kitchen::suggest_random(&self.catalog, self.selected_person(), rng)?.clone();
        let stored = self.suggestion.insert(dish);
        let event = SessionEvent::DishSuggested {
            mode: SuggestMode::Random,
            dish: stored.name.clone(),
        };
        notify(&mut self.observers, &event);
        Ok(stored)
    }

    /// Favorites lottery for the selected person. A failed draw leaves the
    /// previous suggestion in place.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoPersonSelected`] without a selection; the engine's
    /// no-favorites and stale-favorites errors pass through.
    pub fn suggest_favorite<R>(&mut self, rng: &mut R) -> SessionResult<&Dish>
    where
        R: Rng + ?Sized,
    {
        let person = self
            .selected_person()
            .ok_or(SessionError::NoPersonSelected)?;
        let dish = sofreh_kitchen::suggest_favorite(&self.catalog, person, rng)?.clone();
        let stored = self.suggestion.insert(dish);
        let event = SessionEvent::DishSuggested {
            mode: SuggestMode::Favorites,
            dish: stored.name.clone(),
        };
        notify(&mut self.observers, &event);
        Ok(stored)
    }

    /// True when the favorites lottery can run: somebody is selected and
    /// they have liked at least one dish. Lets the shell surface the
    /// disabled state instead of failing.
    pub fn favorite_lottery_available(&self) -> bool {
        self.selected_person().is_some_and(Person::has_favorites)
    }

    /// Toggles a dish on the selected person's favorites and returns the
    /// new state.
    pub fn toggle_like(&mut self, dish_name: &str) -> SessionResult<bool> {
        let id = self
            .selected
            .clone()
            .ok_or(SessionError::NoPersonSelected)?;
        let liked = self.roster.toggle_like(&id, dish_name)?;
        let event = SessionEvent::LikeToggled {
            id,
            dish: dish_name.to_string(),
            liked,
        };
        notify(&mut self.observers, &event);
        Ok(liked)
    }

    /// Replaces the shopping list with the current suggestion's
    /// ingredients.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoSuggestion`] when nothing has been suggested; the
    /// list stays unchanged.
    pub fn accept_suggestion(&mut self) -> SessionResult<()> {
        let dish = self.suggestion.as_ref().ok_or(SessionError::NoSuggestion)?;
        self.shopping.replace_from(dish);
        info!(dish = %dish.name, items = self.shopping.len(), "suggestion accepted");
        let event = SessionEvent::SuggestionAccepted {
            dish: dish.name.clone(),
            items: self.shopping.len(),
        };
        notify(&mut self.observers, &event);
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn suggestion(&self) -> Option<&Dish> {
        self.suggestion.as_ref()
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn share_text(&self) -> String {
        self.shopping.as_share_text()
    }
}
