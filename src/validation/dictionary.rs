use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

use crate::error::{DictionaryError, Result};

/// Answers whether a string is a real word.
///
/// Any `Fn(&str) -> bool` is an oracle, which keeps tests deterministic.
pub trait WordOracle {
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> WordOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Word-list backed oracle
pub struct DictionaryValidator {
    words: HashSet<String>,
}

impl DictionaryValidator {
    pub fn new(dictionary_path: impl AsRef<Path>) -> Result<Self> {
        let dictionary_path = dictionary_path.as_ref();

        info!("Loading dictionary from {}", dictionary_path.display());

        let file = File::open(dictionary_path).map_err(DictionaryError::LoadError)?;

        let reader = io::BufReader::new(file);

        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(DictionaryError::LoadError)?;
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        let validator = Self::from_words(words)?;
        info!("Loaded {} words from dictionary", validator.len());

        Ok(validator)
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::EmptyDictionary.into());
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for DictionaryValidator {
    fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }
}
