//! Lightweight relevance scoring for the in-memory store's text query

use crate::modules::restaurant::domain::Restaurant;

/// Minimum normalised Levenshtein similarity for a fuzzy word hit
const FUZZY_THRESHOLD: f64 = 0.8;

/// Scores restaurants against a free-text query over name and cuisine.
///
/// A query term that appears inside a word scores 1.0; otherwise the best
/// fuzzy similarity at or above the threshold counts. Terms are OR-ed.
pub struct TextMatcher {
    terms: Vec<String>,
}

impl TextMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            terms: tokenize(query),
        }
    }

    /// `None` when no term matches
    pub fn score(&self, restaurant: &Restaurant) -> Option<f64> {
        let mut words = tokenize(&restaurant.name);
        words.extend(tokenize(&restaurant.cuisine_type));

        let total: f64 = self
            .terms
            .iter()
            .map(|term| best_word_score(term, &words))
            .sum();

        (total > 0.0).then_some(total)
    }
}

fn best_word_score(term: &str, words: &[String]) -> f64 {
    words
        .iter()
        .map(|word| {
            if word.contains(term) {
                1.0
            } else {
                let similarity = strsim::normalized_levenshtein(term, word);
                if similarity >= FUZZY_THRESHOLD {
                    similarity
                } else {
                    0.0
                }
            }
        })
        .fold(0.0, f64::max)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
