use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::validation::dictionary::WordOracle;

/// Candidates must be longer than this many characters to be considered
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Already accepted earlier in this game
    AlreadyUsed,
    /// Letters cannot be taken from the root word
    NotPossible,
    /// Rejected by the dictionary oracle
    NotExisting,
}

/// Result of classifying one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted,
    /// Too short or equal to the root word. Dropped without feedback.
    Ignored,
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Lowercase and trim surrounding whitespace
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Classify a candidate against the root word and the words used so far.
///
/// Rules are checked in order and the first failing one decides the outcome:
/// 1. Too short (at most [`MIN_WORD_LENGTH`] characters) or equal to the root: `Ignored`
/// 2. Already in `used`: `Rejected(AlreadyUsed)`
/// 3. Not buildable from the root's letters: `Rejected(NotPossible)`
/// 4. Not a word according to `oracle`: `Rejected(NotExisting)`
///
/// Anything else is `Accepted`. The oracle is only consulted when every
/// earlier rule passes.
pub fn classify<O>(root: &str, used: &[String], candidate: &str, oracle: &O) -> ValidationOutcome
where
    O: WordOracle + ?Sized,
{
    let root = normalize(root);
    let word = normalize(candidate);

    if word.chars().count() <= MIN_WORD_LENGTH || word == root {
        return ValidationOutcome::Ignored;
    }

    if used.iter().any(|w| *w == word) {
        return ValidationOutcome::Rejected(Rejection::AlreadyUsed);
    }

    if !is_possible(&root, &word) {
        return ValidationOutcome::Rejected(Rejection::NotPossible);
    }

    if !oracle.is_valid_word(&word) {
        return ValidationOutcome::Rejected(Rejection::NotExisting);
    }

    ValidationOutcome::Accepted
}

/// Check that every character of `word` can be taken from `root`, each
/// occurrence in `root` usable at most once
fn is_possible(root: &str, word: &str) -> bool {
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for c in root.chars() {
        *remaining.entry(c).or_insert(0) += 1;
    }

    for c in word.chars() {
        match remaining.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const ROOT: &str = "silkworm";

    fn accept_all(_: &str) -> bool {
        true
    }

    fn reject_all(_: &str) -> bool {
        false
    }

    #[test]
    fn test_is_possible() {
        assert!(is_possible(ROOT, "silk"));
        assert!(is_possible(ROOT, "worms"));
        assert!(is_possible(ROOT, "klis")); // Order is irrelevant
        assert!(is_possible(ROOT, ROOT));

        // Only one 's' in the root
        assert!(!is_possible(ROOT, "silks"));
        // Letter not in the root
        assert!(!is_possible(ROOT, "milky"));
        // Substring is not enough when multiplicities exceed the root
        assert!(!is_possible("letter", "lettter"));
        assert!(is_possible("letter", "trete"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  SiLk \n"), "silk");
        assert_eq!(normalize(""), "");

        for input in ["  Worm", "MILK\t", "already", " ", "Straße"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_trivial_input_is_ignored() {
        let used: Vec<String> = Vec::new();

        assert_eq!(classify(ROOT, &used, "", &accept_all), ValidationOutcome::Ignored);
        assert_eq!(classify(ROOT, &used, "   ", &accept_all), ValidationOutcome::Ignored);
        assert_eq!(classify(ROOT, &used, "ilk", &accept_all), ValidationOutcome::Ignored);
        assert_eq!(classify(ROOT, &used, " ILK ", &accept_all), ValidationOutcome::Ignored);
        assert_eq!(classify(ROOT, &used, "silkworm", &accept_all), ValidationOutcome::Ignored);
        assert_eq!(classify(ROOT, &used, " SilkWorm ", &accept_all), ValidationOutcome::Ignored);

        // Short input wins even when it would also fail later rules
        assert_eq!(classify(ROOT, &used, "zzz", &reject_all), ValidationOutcome::Ignored);
    }

    #[test]
    fn test_root_comparison_is_case_insensitive() {
        let used: Vec<String> = Vec::new();
        assert_eq!(
            classify("SilkWorm", &used, "silkworm", &accept_all),
            ValidationOutcome::Ignored
        );
        assert_eq!(classify("SilkWorm", &used, "silk", &accept_all), ValidationOutcome::Accepted);
    }

    #[test]
    fn test_rejections() {
        let used = vec!["silk".to_string()];
        let oracle = |word: &str| ["silk", "worm", "milk"].contains(&word);

        assert_eq!(
            classify(ROOT, &used, "Silk", &oracle),
            ValidationOutcome::Rejected(Rejection::AlreadyUsed)
        );
        assert_eq!(
            classify(ROOT, &used, "silks", &oracle),
            ValidationOutcome::Rejected(Rejection::NotPossible)
        );
        assert_eq!(
            classify(ROOT, &used, "xyzz", &oracle),
            ValidationOutcome::Rejected(Rejection::NotPossible)
        );
        assert_eq!(
            classify(ROOT, &used, "work", &oracle),
            ValidationOutcome::Rejected(Rejection::NotExisting)
        );
        assert_eq!(classify(ROOT, &used, "worm", &oracle), ValidationOutcome::Accepted);
    }

    #[test]
    fn test_not_existing_when_letters_fit() {
        let used: Vec<String> = Vec::new();
        assert_eq!(
            classify("xyzzyabc", &used, "xyzz", &reject_all),
            ValidationOutcome::Rejected(Rejection::NotExisting)
        );
    }

    #[test]
    fn test_rule_order() {
        let calls = Cell::new(0);
        let oracle = |_: &str| {
            calls.set(calls.get() + 1);
            false
        };

        // Already used beats not possible
        let used = vec!["zzzz".to_string()];
        assert_eq!(
            classify(ROOT, &used, "zzzz", &oracle),
            ValidationOutcome::Rejected(Rejection::AlreadyUsed)
        );

        // Not possible beats not existing, and the oracle is never asked
        assert_eq!(
            classify(ROOT, &used, "silks", &oracle),
            ValidationOutcome::Rejected(Rejection::NotPossible)
        );
        assert_eq!(calls.get(), 0);

        assert_eq!(
            classify(ROOT, &used, "wilk", &oracle),
            ValidationOutcome::Rejected(Rejection::NotExisting)
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_non_alphabetic_characters_are_literal() {
        let used: Vec<String> = Vec::new();

        assert_eq!(
            classify(ROOT, &used, "silk!", &accept_all),
            ValidationOutcome::Rejected(Rejection::NotPossible)
        );
        assert_eq!(
            classify("silk-worm", &used, "silk-", &reject_all),
            ValidationOutcome::Rejected(Rejection::NotExisting)
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters but more than three bytes
        let used: Vec<String> = Vec::new();
        let root = "ééééllll";
        assert_eq!(classify(root, &used, "ééé", &accept_all), ValidationOutcome::Ignored);
        assert_eq!(classify(root, &used, "éééé", &accept_all), ValidationOutcome::Accepted);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ValidationOutcome::Rejected(Rejection::NotPossible);
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "rejected", "reason": "not_possible"}));

        let json = serde_json::to_value(ValidationOutcome::Accepted).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "accepted"}));
    }
}
