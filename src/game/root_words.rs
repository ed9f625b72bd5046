use rand::prelude::IndexedRandom;
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Result, RootWordError};
use crate::validation::normalize;

/// Root word used when the start-word list has nothing to offer
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Supplies root words for new games
#[derive(Debug, Clone, Default)]
pub struct RootWordSource {
    words: Vec<String>,
}

impl RootWordSource {
    /// Load a newline-separated start-word list
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        info!("Loading start words from {}", path.display());

        let contents = fs::read_to_string(path).map_err(RootWordError::LoadError)?;
        let source = Self::from_words(contents.lines());

        info!("Loaded {} start words", source.len());

        Ok(source)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random root word, or [`FALLBACK_ROOT_WORD`] if there are none
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self.words.choose(rng) {
            Some(word) => word.clone(),
            None => {
                warn!("No start words available, using '{}'", FALLBACK_ROOT_WORD);
                FALLBACK_ROOT_WORD.to_string()
            }
        }
    }
}
