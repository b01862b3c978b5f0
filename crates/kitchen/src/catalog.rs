use serde::{Deserialize, Serialize};

/// A dish the household knows how to cook.
///
/// The name doubles as the human-readable key; ingredients and steps keep
/// their authored order. Dishes are immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// The fixed set of dishes suggestions are drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Built-in catalog of household staples. Deterministic: the same
    /// dishes in the same order on every call.
    pub fn seed() -> Self {
        Catalog {
            dishes: seed_dishes(),
        }
    }

    /// Wraps an explicit dish list. Mostly useful for tests.
    pub fn from_dishes(dishes: Vec<Dish>) -> Self {
        Catalog { dishes }
    }

    /// Every dish, in catalog order.
    pub fn all(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Looks a dish up by its exact name.
    pub fn find(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.name == name)
    }
}

fn dish(name: &str, ingredients: &[&str], steps: &[&str]) -> Dish {
    Dish {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_dishes() -> Vec<Dish> {
    vec![
        dish(
            "قورمه‌سبزی",
            &[
                "گوشت خورشتی 400 گرم",
                "سبزی قورمه 300 گرم",
                "لوبیا قرمز 1 پیمانه",
                "لیمو عمانی 2 عدد",
                "پیاز 1 عدد",
            ],
            &[
                "پیاز را تفت دهید، گوشت را اضافه کنید.",
                "سبزی را جدا تفت دهید و به قابلمه بیفزایید.",
                "لوبیا خیس‌خورده و لیمو عمانی را اضافه و با آب بپزید.",
            ],
        ),
        dish(
            "خورش قیمه",
            &[
                "گوشت خورشتی 300 گرم",
                "لپه 1 پیمانه",
                "سیب‌زمینی 2 عدد",
                "رب گوجه 2 ق‌غ",
                "پیاز 1 عدد",
            ],
            &[
                "پیاز و گوشت را تفت دهید.",
                "لپه نیم‌پز و رب را اضافه کنید.",
                "با لیمو عمانی جا بیفتد؛ سیب‌زمینی سرخ‌شده را آخر اضافه کنید.",
            ],
        ),
        dish(
            "زرشک‌پلو با مرغ",
            &[
                "مرغ 4 تکه",
                "زرشک 3 ق‌غ",
                "برنج 2 پیمانه",
                "پیاز 1 عدد",
                "زعفران",
            ],
            &[
                "مرغ را با پیاز و ادویه سرخ و سپس با آب کم بپزید.",
                "برنج را آبکش کنید.",
                "زرشک را با کره و زعفران تفت دهید و با مرغ سرو کنید.",
            ],
        ),
        dish(
            "میرزا قاسمی",
            &[
                "بادمجان 4 عدد",
                "تخم‌مرغ 3 عدد",
                "سیر 4 حبه",
                "گوجه 2 عدد",
            ],
            &[
                "بادمجان‌ها را کبابی و له کنید.",
                "سیر و گوجه را تفت دهید.",
                "تخم‌مرغ اضافه و سریع هم بزنید.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_seed_catalog_has_four_dishes() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 4, "seed catalog should hold four dishes");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_seed_dishes_are_complete() {
        let catalog = Catalog::seed();
        for dish in catalog.all() {
            assert!(!dish.name.is_empty(), "dish name should not be empty");
            assert!(
                !dish.ingredients.is_empty(),
                "dish {} should have ingredients",
                dish.name
            );
            assert!(
                !dish.steps.is_empty(),
                "dish {} should have steps",
                dish.name
            );
        }
    }

    #[test]
    fn test_seed_dish_names_are_unique() {
        let catalog = Catalog::seed();
        let names: BTreeSet<&str> = catalog.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len(), "dish names should be unique");
    }

    #[test]
    fn test_seed_is_deterministic() {
        let first = Catalog::seed();
        let second = Catalog::seed();
        let first_names: Vec<&str> = first.all().iter().map(|d| d.name.as_str()).collect();
        let second_names: Vec<&str> = second.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(first_names, second_names);
    }

    #[test]
    fn test_find_by_exact_name() {
        let catalog = Catalog::seed();
        let dish = catalog.find("میرزا قاسمی");
        assert!(dish.is_some(), "seed dish should be findable by name");
        assert_eq!(dish.map(|d| d.ingredients.len()), Some(4));

        assert!(catalog.find("قورمه").is_none(), "lookup is exact, not fuzzy");
    }

    #[test]
    fn test_from_dishes_preserves_order() {
        let catalog = Catalog::from_dishes(vec![
            dish("الف", &["x"], &["y"]),
            dish("ب", &["x"], &["y"]),
        ]);
        let names: Vec<&str> = catalog.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["الف", "ب"]);
    }
}
