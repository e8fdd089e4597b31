// =============================================================================
// Shared types used across the Tidemark indicator engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// Discrete trading signal emitted by a single indicator or by the
/// majority-vote aggregation of a timeframe.
///
/// A three-valued outcome, not a boolean pair: an indicator with no opinion
/// (neutral territory, undefined value) votes `Hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Default for Signal {
    fn default() -> Self {
        Self::Hold
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
            Self::Hold => write!(f, "hold"),
        }
    }
}
