//! Lexicon-based headline sentiment scoring.
//!
//! Maps a headline to a polarity score in [-1.0, 1.0] using weighted
//! tables of financial vocabulary. The contract is direction and rough
//! magnitude: positive for favorable headlines, negative for
//! unfavorable ones, 0.0 when the text carries no signal. Scoring is
//! applied independently per headline with no cross-row state.

use crate::normalize;

/// Favorable financial vocabulary and weights.
const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("beat", 0.5),
    ("beats", 0.5),
    ("surge", 0.6),
    ("surges", 0.6),
    ("rally", 0.5),
    ("rallies", 0.5),
    ("soar", 0.7),
    ("soars", 0.7),
    ("jump", 0.4),
    ("jumps", 0.4),
    ("gain", 0.4),
    ("gains", 0.4),
    ("rise", 0.3),
    ("rises", 0.3),
    ("record", 0.4),
    ("strong", 0.4),
    ("growth", 0.3),
    ("profit", 0.3),
    ("upgrade", 0.5),
    ("upgraded", 0.5),
    ("raise", 0.4),
    ("raises", 0.4),
    ("outperform", 0.5),
    ("bullish", 0.6),
    ("breakthrough", 0.5),
    ("wins", 0.4),
];

/// Unfavorable financial vocabulary and weights.
const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("miss", -0.5),
    ("misses", -0.5),
    ("plunge", -0.6),
    ("plunges", -0.6),
    ("crash", -0.7),
    ("crashes", -0.7),
    ("fall", -0.3),
    ("falls", -0.3),
    ("drop", -0.4),
    ("drops", -0.4),
    ("slump", -0.5),
    ("slumps", -0.5),
    ("loss", -0.4),
    ("losses", -0.4),
    ("weak", -0.4),
    ("decline", -0.3),
    ("declines", -0.3),
    ("downgrade", -0.5),
    ("downgraded", -0.5),
    ("cut", -0.4),
    ("cuts", -0.4),
    ("lawsuit", -0.4),
    ("fraud", -0.6),
    ("bankruptcy", -0.8),
    ("bearish", -0.6),
    ("warns", -0.4),
];

/// Look up a token's lexicon weight, if any.
fn word_weight(token: &str) -> Option<f64> {
    POSITIVE_WORDS
        .iter()
        .chain(NEGATIVE_WORDS)
        .find(|(word, _)| *word == token)
        .map(|(_, weight)| *weight)
}

/// Score a headline's polarity in the closed interval [-1.0, 1.0].
///
/// The score is the mean weight of lexicon-matched tokens, so a single
/// strong word is not diluted by surrounding neutral text. Headlines
/// with no lexicon match score 0.0.
///
/// # Example
/// ```
/// use news::polarity;
///
/// assert!(polarity("Acme beats estimates") > 0.0);
/// assert!(polarity("Acme misses guidance") < 0.0);
/// assert_eq!(polarity("Acme schedules annual meeting"), 0.0);
/// ```
pub fn polarity(text: &str) -> f64 {
    let normalized = normalize(text);
    let weights: Vec<f64> = normalized
        .split_whitespace()
        .filter_map(word_weight)
        .collect();

    if weights.is_empty() {
        return 0.0;
    }

    let mean = weights.iter().sum::<f64>() / weights.len() as f64;
    mean.clamp(-1.0, 1.0)
}
