pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod session;

pub use config::Config;
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionEvent};
