//! Copy scoring — deterministic marketing-quality heuristic.
//!
//! The editor page mirrors this exact heuristic in the browser so displayed
//! scores match what the server would compute. Keep the two in sync.

/// Scores a piece of marketing copy on a 0–100 scale.
///
/// Base 50; short copy (<30 chars) loses 5, long copy (>90 chars) loses 10;
/// action keywords gain 10; closing punctuation gains 3. Pure and total:
/// defined for any string, including empty.
pub fn score_copy(text: &str) -> u8 {
    let mut score: i32 = 50;

    let chars = text.chars().count();
    if chars < 30 {
        score -= 5;
    }
    if chars > 90 {
        score -= 10;
    }

    let lower = text.to_lowercase();
    if ["free", "now", "instant"].iter().any(|kw| lower.contains(kw)) {
        score += 10;
    }

    if matches!(text.chars().last(), Some('!' | '?' | '.')) {
        score += 3;
    }

    score.clamp(0, 100) as u8
}
