use sofreh_household::RosterError;
use sofreh_kitchen::SuggestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no family member is selected")]
    NoPersonSelected,

    #[error("nothing has been suggested yet")]
    NoSuggestion,

    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("suggestion error: {0}")]
    Suggest(#[from] SuggestError),
}

pub type SessionResult<T> = Result<T, SessionError>;
