use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Primary error type for the word scramble game
#[derive(Error, Debug, Diagnostic)]
pub enum GameError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(wordscramble::config_error))]
    Config(String),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(wordscramble::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Root word error: {0}")]
    #[diagnostic(code(wordscramble::root_word_error))]
    RootWords(#[from] RootWordError),

    #[error("Session error: {0}")]
    #[diagnostic(code(wordscramble::session_error))]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(wordscramble::io_error))]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(wordscramble::serialization_error))]
    Serialization(#[from] serde_json::Error),
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(code(wordscramble::dictionary::load_error))]
    LoadError(#[from] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(wordscramble::dictionary::empty))]
    EmptyDictionary,
}

/// Errors from the start-word list
#[derive(Error, Debug, Diagnostic)]
pub enum RootWordError {
    #[error("Failed to load start words: {0}")]
    #[diagnostic(
        code(wordscramble::root_words::load_error),
        help("check START_WORDS_FILE_PATH")
    )]
    LoadError(#[from] io::Error),
}

/// Contract violations in how a session is driven
#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum SessionError {
    #[error("No game in progress: start must be called before submit")]
    #[diagnostic(code(wordscramble::session::invalid_state))]
    InvalidState,
}

pub use GameError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
