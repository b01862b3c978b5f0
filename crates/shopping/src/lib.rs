pub mod list;

pub use list::ShoppingList;
