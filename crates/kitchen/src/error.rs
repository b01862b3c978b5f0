use thiserror::Error;

/// Errors produced by the suggestion engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestError {
    /// The catalog holds no dishes at all. Cannot happen with the built-in
    /// seed catalog; surfaced instead of silently swallowed.
    #[error("the dish catalog is empty")]
    EmptyCatalog,

    /// The favorites lottery was asked for a person who has liked nothing.
    /// The lottery is unavailable; no suggestion is produced.
    #[error("no favorite dishes to draw from")]
    NoFavorites,

    /// Every liked dish name is stale: none of them matches a catalog dish.
    #[error("no liked dish matches the catalog")]
    NoMatchingFavorite,
}

pub type SuggestResult<T> = Result<T, SuggestError>;
