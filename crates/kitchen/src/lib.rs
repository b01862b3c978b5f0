pub mod catalog;
pub mod error;
pub mod suggest;

// Re-export commonly used types
pub use catalog::{Catalog, Dish};
pub use error::{SuggestError, SuggestResult};
pub use suggest::{SuggestMode, allergy_filtered, dish_is_safe, suggest_favorite, suggest_random};
