// Per-word score record

use serde::{Deserialize, Serialize};

/// Upper bound of both scores.
pub const MAX_SCORE: f64 = 100.0;

/// Round to two decimal places, the precision scores are published with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a score into `[0, 100]`.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_SCORE)
}

/// The two quality scores attached to every curated word.
///
/// Serialized as `{"freq": f, "like": l}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Popularity in the reference corpus, 0-100.
    pub freq: f64,
    /// How much the spelling looks like an English word, 0-100.
    pub like: f64,
}

impl ScoreRecord {
    /// Build a record, clamping both values into range and rounding them to
    /// two decimals.
    pub fn new(freq: f64, like: f64) -> Self {
        Self {
            freq: round2(clamp_score(freq)),
            like: round2(clamp_score(like)),
        }
    }
}
