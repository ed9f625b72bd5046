use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::validation::{classify, normalize, ValidationOutcome, WordOracle};

/// State of a game in progress
#[derive(Debug, Clone)]
struct ActiveGame {
    root_word: String,
    /// Accepted words, most recent first
    used_words: Vec<String>,
    score: usize,
}

/// Serializable view of a session, for front-ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub root_word: Option<String>,
    pub used_words: Vec<String>,
    pub score: usize,
}

/// A single-player game against one root word.
///
/// A session starts uninitialized; [`GameSession::start`] begins a game and
/// calling it again restarts with a fresh history and score.
pub struct GameSession<O> {
    oracle: O,
    game: Option<ActiveGame>,
}

impl<O: WordOracle> GameSession<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle, game: None }
    }

    /// Start a new game, discarding any progress on the previous one
    pub fn start(&mut self, root_word: &str) {
        let root_word = normalize(root_word);

        match &self.game {
            Some(previous) => info!(
                "Restarting game: '{}' -> '{}' (discarding {} words, score {})",
                previous.root_word,
                root_word,
                previous.used_words.len(),
                previous.score
            ),
            None => info!("Starting game with root word '{}'", root_word),
        }

        self.game = Some(ActiveGame {
            root_word,
            used_words: Vec::new(),
            score: 0,
        });
    }

    /// Submit a candidate word.
    ///
    /// Only `Accepted` changes state: the word goes to the front of the used
    /// words and its length is added to the score. Fails with
    /// [`SessionError::InvalidState`] if no game has been started.
    pub fn submit(&mut self, candidate: &str) -> Result<ValidationOutcome> {
        let game = self.game.as_mut().ok_or(SessionError::InvalidState)?;
        let word = normalize(candidate);

        let outcome = classify(&game.root_word, &game.used_words, &word, &self.oracle);
        debug!("Candidate '{}' classified as {:?}", word, outcome);

        if outcome.is_accepted() {
            game.score += word.chars().count();
            game.used_words.insert(0, word);
            info!(
                "Accepted '{}', score is now {}",
                game.used_words[0], game.score
            );
        }

        Ok(outcome)
    }

    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    pub fn root_word(&self) -> Option<&str> {
        self.game.as_ref().map(|g| g.root_word.as_str())
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> &[String] {
        self.game
            .as_ref()
            .map(|g| g.used_words.as_slice())
            .unwrap_or_default()
    }

    pub fn score(&self) -> usize {
        self.game.as_ref().map_or(0, |g| g.score)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            root_word: self.root_word().map(str::to_string),
            used_words: self.used_words().to_vec(),
            score: self.score(),
        }
    }
}
