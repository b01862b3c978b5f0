use rand::SeedableRng;
use rand::rngs::StdRng;
use sofreh_kitchen::Dish;

use crate::config::Config;

pub mod dishes;
pub mod shell;
pub mod suggest;

/// Random source for suggestion commands. The CLI seed wins over the
/// configured one; with neither, the source is OS entropy.
pub(crate) fn resolve_rng(config: &Config, cli_seed: Option<u64>) -> StdRng {
    match cli_seed.or(config.suggestion.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Full dish card: name, ingredients, numbered steps.
pub(crate) fn print_dish(dish: &Dish) {
    println!("{}", dish.name);
    for ingredient in &dish.ingredients {
        println!("  - {ingredient}");
    }
    for (index, step) in dish.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
}
