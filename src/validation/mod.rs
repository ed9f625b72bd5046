pub mod dictionary;
pub mod rules;

// Re-export common types
pub use dictionary::{DictionaryValidator, WordOracle};
pub use rules::{classify, normalize, Rejection, ValidationOutcome, MIN_WORD_LENGTH};
