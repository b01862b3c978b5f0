use anyhow::Result;
use sofreh_kitchen::Catalog;

use crate::cli::print_dish;

/// Print the built-in dish catalog.
#[tracing::instrument]
pub fn run(json: bool) -> Result<()> {
    let catalog = Catalog::seed();

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.all())?);
        return Ok(());
    }

    for dish in catalog.all() {
        print_dish(dish);
        println!();
    }

    Ok(())
}
