//! Text statistics extracted from a wish.
//!
//! Four scalars feed the feasibility model: how many words the wish has,
//! how many consulting buzzwords and "fun" words appear in it, and the
//! average word length.

use serde::{Deserialize, Serialize};

/// Vocabulary that nudges the model towards "deliverable".
pub const BUZZWORDS: &[&str] = &[
    "scope",
    "roadmap",
    "operating model",
    "change request",
    "digital",
    "data",
    "ai",
    "ml",
    "analytics",
    "resilience",
    "vegetation",
    "risk",
    "grid",
];

/// Vocabulary that nudges the model towards "out of scope".
pub const FUN_WORDS: &[&str] = &[
    "bonus",
    "holiday",
    "bike",
    "ps5",
    "champagne",
    "apres",
    "après",
];

/// The four statistics the model is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WishFeatures {
    pub word_count: usize,
    /// Distinct [`BUZZWORDS`] entries found anywhere in the text.
    pub buzzword_count: usize,
    /// Distinct [`FUN_WORDS`] entries found anywhere in the text.
    pub fun_word_count: usize,
    /// Mean characters per word; `0.0` for an empty wish.
    pub avg_word_length: f64,
}

/// Extract [`WishFeatures`] from raw wish text.
///
/// Vocabulary matching is by substring over the lower-cased, trimmed text,
/// so `"said"` counts the `ai` buzzword. Each vocabulary entry contributes at
/// most once regardless of how often it repeats.
pub fn extract_features(text: &str) -> WishFeatures {
    let normalized = text.trim().to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        chars as f64 / words.len() as f64
    };

    WishFeatures {
        word_count: words.len(),
        buzzword_count: count_vocabulary(&normalized, BUZZWORDS),
        fun_word_count: count_vocabulary(&normalized, FUN_WORDS),
        avg_word_length,
    }
}

fn count_vocabulary(text: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|&&entry| text.contains(entry)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wish_has_no_features() {
        assert_eq!(extract_features(""), WishFeatures::default());
        assert_eq!(extract_features("   \t\n"), WishFeatures::default());
    }

    #[test]
    fn counts_words_and_average_length() {
        let f = extract_features("a new bike");
        assert_eq!(f.word_count, 3);
        // (1 + 3 + 4) / 3
        assert!((f.avg_word_length - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn target_phrase_features() {
        let f = extract_features("An agreed scope and no change requests");
        assert_eq!(f.word_count, 7);
        // "scope" and "change request"
        assert_eq!(f.buzzword_count, 2);
        assert_eq!(f.fun_word_count, 0);
        assert!((f.avg_word_length - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn buzzwords_match_inside_other_words() {
        // "said" contains "ai", "grids" contains "grid".
        let f = extract_features("she said grids");
        assert_eq!(f.buzzword_count, 2);
    }

    #[test]
    fn repeated_vocabulary_counts_once() {
        let f = extract_features("bonus bonus bonus");
        assert_eq!(f.fun_word_count, 1);
        assert_eq!(f.word_count, 3);
    }

    #[test]
    fn matching_ignores_case() {
        let f = extract_features("  DIGITAL Roadmap  ");
        assert_eq!(f.buzzword_count, 2);
    }

    #[test]
    fn accented_apres_counts_only_accented_entry() {
        let f = extract_features("Après-ski");
        assert_eq!(f.fun_word_count, 1);
        // Length is in characters, not bytes.
        assert_eq!(f.avg_word_length, 9.0);

        let f = extract_features("apres ski");
        assert_eq!(f.fun_word_count, 1);
    }

    #[test]
    fn multi_word_entry_needs_single_space() {
        assert_eq!(extract_features("operating model").buzzword_count, 1);
        assert_eq!(extract_features("operating  model").buzzword_count, 0);
    }
}
