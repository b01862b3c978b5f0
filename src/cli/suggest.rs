use anyhow::Result;
use sofreh_household::{AddPersonCommand, Roster, parse_allergy_csv};
use sofreh_kitchen::{Catalog, suggest_random};

use crate::cli::{print_dish, resolve_rng};
use crate::config::Config;

/// One-shot suggestion from the built-in catalog, filtered by an ad-hoc
/// allergy list. Nothing is persisted.
#[tracing::instrument(skip(config))]
pub fn run(config: &Config, allergies: Option<String>, seed: Option<u64>) -> Result<()> {
    let catalog = Catalog::seed();
    let mut rng = resolve_rng(config, seed);

    let dish = match allergies {
        Some(csv) if !parse_allergy_csv(&csv).is_empty() => {
            // Throwaway roster entry so the engine sees the allergies the
            // same way it would for a real family member.
            let mut roster = Roster::new();
            let guest = roster.add(AddPersonCommand::new("مهمان", csv))?;
            suggest_random(&catalog, Some(guest), &mut rng)?
        }
        _ => suggest_random(&catalog, None, &mut rng)?,
    };

    print_dish(dish);

    Ok(())
}
