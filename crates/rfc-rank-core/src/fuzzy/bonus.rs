//! Positional bonus table

use super::Score;
use crate::config::ScoringWeights;

/// Bonus for each character of `candidate`, keyed off the character before it.
///
/// The first character is treated as following a path separator.
pub fn compute_bonus(candidate: &str, weights: &ScoringWeights) -> Vec<Score> {
    let chars: Vec<char> = candidate.chars().collect();
    bonus_for_chars(&chars, weights)
}

pub(crate) fn bonus_for_chars(candidate: &[char], weights: &ScoringWeights) -> Vec<Score> {
    let mut bonus = Vec::with_capacity(candidate.len());
    let mut last = std::path::MAIN_SEPARATOR;

    for &this in candidate {
        let b = if std::path::is_separator(last) {
            weights.match_slash
        } else if matches!(last, '_' | '-' | ' ') {
            weights.match_word
        } else if last == '.' {
            weights.match_dot
        } else if last.is_lowercase() && this.is_uppercase() {
            weights.match_capital
        } else {
            0.0
        };
        bonus.push(b);
        last = this;
    }

    bonus
}
