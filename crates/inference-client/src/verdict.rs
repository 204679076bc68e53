//! Score interpretation

use crate::InferenceError;
use serde::Serialize;
use std::fmt;

/// Binary corrosion verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "Corrosion")]
    Corrosion,
    #[serde(rename = "Not Corrosion")]
    NotCorrosion,
}

impl Verdict {
    /// Round the score half-to-even; exactly 1 means no corrosion, anything else is corrosion.
    ///
    /// The score is not range checked, so 1.4 maps to `NotCorrosion` and 2.0 to `Corrosion`.
    pub fn from_score(score: f64) -> Result<Self, InferenceError> {
        if !score.is_finite() {
            return Err(InferenceError::NonFiniteScore(score));
        }

        if score.round_ties_even() == 1.0 {
            Ok(Verdict::NotCorrosion)
        } else {
            Ok(Verdict::Corrosion)
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Corrosion => "Corrosion",
            Verdict::NotCorrosion => "Not Corrosion",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
