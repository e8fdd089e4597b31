// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicator library.  Every
// compute function returns a series aligned 1:1 with its input, with `None`
// marking warm-up positions and numeric edge cases, so callers are forced to
// handle undefined values explicitly.
//
// `IndicatorKind` is the fixed registry over the library: iteration order is
// declaration order, which keeps vote evaluation and reporting reproducible.

pub mod ema;
pub mod hma;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod williams_r;
pub mod wma;

use serde::{Deserialize, Serialize};

use crate::classify;
use crate::config::IndicatorParams;
use crate::series::PriceSeries;
use crate::types::Signal;

/// A derived numeric series aligned 1:1 by index with the price series it
/// was computed from.  `None` marks warm-up or an undefined point.
pub type IndicatorSeries = Vec<Option<f64>>;

/// Tagged registry over the indicator library.
///
/// The declaration order is the evaluation order everywhere the engine
/// iterates over indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Wma,
    Hma,
    Rsi,
    Stochastic,
    Macd,
    WilliamsR,
}

impl IndicatorKind {
    /// All indicators in fixed evaluation order.
    pub const ALL: [IndicatorKind; 8] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Hma,
        Self::Rsi,
        Self::Stochastic,
        Self::Macd,
        Self::WilliamsR,
    ];

    /// Human-readable indicator name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Hma => "HMA",
            Self::Rsi => "RSI",
            Self::Stochastic => "Stochastic",
            Self::Macd => "MACD",
            Self::WilliamsR => "Williams %R",
        }
    }

    /// Run this indicator over `series` with the given parameters.
    pub fn compute(self, series: &PriceSeries, params: &IndicatorParams) -> IndicatorSeries {
        let closes = series.closes();
        match self {
            Self::Sma => sma::simple_moving_average(&closes, params.sma_window),
            Self::Ema => ema::exponential_moving_average(&closes, params.ema_span),
            Self::Wma => wma::weighted_moving_average(&closes, params.wma_window),
            Self::Hma => hma::hull_moving_average(&closes, params.hma_window),
            Self::Rsi => rsi::relative_strength_index(&closes, params.rsi_period),
            Self::Stochastic => stochastic::stochastic_k(
                &closes,
                &series.highs(),
                &series.lows(),
                params.stochastic_period,
            ),
            Self::Macd => macd::macd_line(&closes, params.macd_fast, params.macd_slow),
            Self::WilliamsR => williams_r::williams_r(
                &closes,
                &series.highs(),
                &series.lows(),
                params.williams_period,
            ),
        }
    }

    /// The threshold classifier for signal-bearing indicators.
    ///
    /// Moving averages report values only and carry no classifier; the vote
    /// set is exactly the kinds returning `Some` here.
    pub fn classifier(self) -> Option<fn(f64) -> Signal> {
        match self {
            Self::Rsi => Some(classify::rsi_signal),
            Self::Stochastic => Some(classify::stochastic_signal),
            Self::Macd => Some(classify::macd_signal),
            Self::WilliamsR => Some(classify::williams_signal),
            Self::Sma | Self::Ema | Self::Wma | Self::Hma => None,
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Shared rolling-window helpers
// ---------------------------------------------------------------------------

/// Maximum over a window of optional values; `None` if any value is missing.
pub(crate) fn window_max(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .copied()
        .try_fold(f64::NEG_INFINITY, |acc, v| v.map(|v| acc.max(v)))
        .filter(|v| v.is_finite())
}

/// Minimum over a window of optional values; `None` if any value is missing.
pub(crate) fn window_min(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .copied()
        .try_fold(f64::INFINITY, |acc, v| v.map(|v| acc.min(v)))
        .filter(|v| v.is_finite())
}
