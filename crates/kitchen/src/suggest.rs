use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IndexedRandom;
use sofreh_household::Person;
use strum::{AsRefStr, Display, EnumString};
use tracing::warn;

use crate::catalog::{Catalog, Dish};
use crate::error::{SuggestError, SuggestResult};

/// How a suggestion was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SuggestMode {
    Random,
    Favorites,
}

/// True when none of the allergy tokens occurs, case-insensitively, inside
/// any ingredient line of the dish.
///
/// Matching is plain substring containment: the allergy "گوشت" excludes a
/// dish listing "گوشت خورشتی 400 گرم". An empty allergy set marks every
/// dish safe.
pub fn dish_is_safe(dish: &Dish, allergies: &BTreeSet<String>) -> bool {
    allergies.iter().all(|allergy| {
        let needle = allergy.to_lowercase();
        !dish
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
    })
}

/// The dishes that survive allergy filtering, in catalog order.
pub fn allergy_filtered<'a>(catalog: &'a Catalog, allergies: &BTreeSet<String>) -> Vec<&'a Dish> {
    catalog
        .all()
        .iter()
        .filter(|dish| dish_is_safe(dish, allergies))
        .collect()
}

/// Picks a dish uniformly at random, honoring the person's allergies.
///
/// With no person selected (or no allergies recorded) the whole catalog is
/// eligible. When filtering leaves nothing, the allergy constraint is
/// dropped and the pick falls back to the whole catalog; the fallback is
/// logged at WARN so it never passes silently.
///
/// # Errors
///
/// Returns [`SuggestError::EmptyCatalog`] when the catalog has no dishes.
pub fn suggest_random<'a, R>(
    catalog: &'a Catalog,
    person: Option<&Person>,
    rng: &mut R,
) -> SuggestResult<&'a Dish>
where
    R: Rng + ?Sized,
{
    if catalog.is_empty() {
        return Err(SuggestError::EmptyCatalog);
    }

    let eligible: Vec<&Dish> = match person {
        Some(person) if !person.allergies().is_empty() => {
            let safe = allergy_filtered(catalog, person.allergies());
            if safe.is_empty() {
                warn!(
                    person = person.name(),
                    allergies = person.allergies().len(),
                    "no allergy-safe dish; falling back to the whole catalog"
                );
                catalog.all().iter().collect()
            } else {
                safe
            }
        }
        _ => catalog.all().iter().collect(),
    };

    eligible.choose(rng).copied().ok_or(SuggestError::EmptyCatalog)
}

/// Favorites lottery: picks uniformly among the catalog dishes the person
/// has liked.
///
/// # Errors
///
/// - [`SuggestError::NoFavorites`] when the person has liked nothing.
/// - [`SuggestError::NoMatchingFavorite`] when every liked name is stale,
///   matching no catalog dish.
pub fn suggest_favorite<'a, R>(
    catalog: &'a Catalog,
    person: &Person,
    rng: &mut R,
) -> SuggestResult<&'a Dish>
where
    R: Rng + ?Sized,
{
    if !person.has_favorites() {
        return Err(SuggestError::NoFavorites);
    }

    let favorites: Vec<&Dish> = catalog
        .all()
        .iter()
        .filter(|dish| person.likes_dish(&dish.name))
        .collect();

    favorites
        .choose(rng)
        .copied()
        .ok_or(SuggestError::NoMatchingFavorite)
}
