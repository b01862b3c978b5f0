use rand::SeedableRng;
use rand::rngs::StdRng;
use sofreh_household::{AddPersonCommand, PersonId, Roster};
use sofreh_kitchen::{Catalog, SuggestError, suggest_favorite, suggest_random};

fn add_member(roster: &mut Roster, name: &str, allergies: &str) -> PersonId {
    roster
        .add(AddPersonCommand::new(name, allergies))
        .expect("adding a roster member should succeed")
        .id()
        .clone()
}

#[test]
fn test_random_suggestion_comes_from_the_catalog() {
    let catalog = Catalog::seed();
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = suggest_random(&catalog, None, &mut rng)
            .expect("seed catalog should always yield a dish");
        assert!(
            catalog.find(&dish.name).is_some(),
            "suggested dish {} should exist in the catalog",
            dish.name
        );
    }
}

#[test]
fn test_random_suggestion_never_violates_an_allergy() {
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "نیلا", "گوشت");
    let person = roster.get(&id).expect("member was just added");

    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = suggest_random(&catalog, Some(person), &mut rng)
            .expect("safe dishes remain for the گوشت allergy");
        assert!(
            !dish.ingredients.iter().any(|i| i.contains("گوشت")),
            "dish {} lists گوشت despite the allergy",
            dish.name
        );
    }
}

#[test]
fn test_single_safe_dish_is_always_picked() {
    // Three of the four seed dishes list پیاز; only میرزا قاسمی survives.
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "رضا", "پیاز, گوشت");
    let person = roster.get(&id).expect("member was just added");

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = suggest_random(&catalog, Some(person), &mut rng)
            .expect("one safe dish remains");
        assert_eq!(dish.name, "میرزا قاسمی");
    }
}

#[test]
fn test_unsatisfiable_allergies_fall_back_to_the_whole_catalog() {
    // Every seed dish lists an ingredient with a count in عدد, so this
    // allergy filters out everything and the fallback must kick in.
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "سارا", "عدد, زعفران");
    let person = roster.get(&id).expect("member was just added");

    let mut rng = StdRng::seed_from_u64(7);
    let dish = suggest_random(&catalog, Some(person), &mut rng)
        .expect("fallback keeps the suggestion flowing");
    assert!(catalog.find(&dish.name).is_some());
}

#[test]
fn test_suggestions_vary_across_seeds() {
    let catalog = Catalog::seed();
    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = suggest_random(&catalog, None, &mut rng)
            .expect("seed catalog should always yield a dish");
        seen.insert(dish.name.clone());
    }
    assert!(
        seen.len() >= 2,
        "64 seeds over a four-dish catalog should hit more than one dish"
    );
}

#[test]
fn test_same_seed_gives_the_same_suggestion() {
    let catalog = Catalog::seed();
    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);
    let first = suggest_random(&catalog, None, &mut first_rng).expect("dish");
    let second = suggest_random(&catalog, None, &mut second_rng).expect("dish");
    assert_eq!(first.name, second.name);
}

#[test]
fn test_empty_catalog_is_an_error() {
    let catalog = Catalog::from_dishes(vec![]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        suggest_random(&catalog, None, &mut rng),
        Err(SuggestError::EmptyCatalog)
    );
}

#[test]
fn test_favorites_lottery_requires_at_least_one_like() {
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "نیلا", "");
    let person = roster.get(&id).expect("member was just added");

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        suggest_favorite(&catalog, person, &mut rng),
        Err(SuggestError::NoFavorites)
    );
}

#[test]
fn test_single_favorite_is_always_drawn() {
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "نیلا", "");
    roster
        .toggle_like(&id, "خورش قیمه")
        .expect("member exists");
    let person = roster.get(&id).expect("member was just added");

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = suggest_favorite(&catalog, person, &mut rng).expect("one favorite");
        assert_eq!(dish.name, "خورش قیمه");
    }
}

#[test]
fn test_favorites_lottery_stays_inside_the_liked_set() {
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "نیلا", "");
    roster.toggle_like(&id, "قورمه‌سبزی").expect("member exists");
    roster.toggle_like(&id, "میرزا قاسمی").expect("member exists");
    let person = roster.get(&id).expect("member was just added");

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = suggest_favorite(&catalog, person, &mut rng).expect("two favorites");
        assert!(
            dish.name == "قورمه‌سبزی" || dish.name == "میرزا قاسمی",
            "lottery drew {} which was never liked",
            dish.name
        );
    }
}

#[test]
fn test_stale_favorites_yield_no_matching_favorite() {
    let catalog = Catalog::seed();
    let mut roster = Roster::new();
    let id = add_member(&mut roster, "نیلا", "");
    roster
        .toggle_like(&id, "کباب کوبیده")
        .expect("member exists");
    let person = roster.get(&id).expect("member was just added");

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        suggest_favorite(&catalog, person, &mut rng),
        Err(SuggestError::NoMatchingFavorite)
    );
}
