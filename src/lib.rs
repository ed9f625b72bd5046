pub mod config;
pub mod error;
pub mod game;
pub mod terminal;
pub mod validation;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, Result, RootWordError, SessionError};

pub use game::{GameSession, RootWordSource};
pub use validation::{Rejection, ValidationOutcome, WordOracle};
