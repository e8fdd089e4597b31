// =============================================================================
// Analysis configuration — timeframes and indicator parameters
// =============================================================================
//
// A plain value passed explicitly into the report assembler, never
// process-wide state.  All fields carry `#[serde(default)]` so a partial
// config file deserializes against the documented defaults.

use serde::{Deserialize, Serialize};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_timeframes() -> Vec<Timeframe> {
    vec![
        Timeframe::new("1 day", 1),
        Timeframe::new("1 week", 5),
        Timeframe::new("1 month", 22),
    ]
}

fn default_sma_window() -> usize {
    10
}

fn default_ema_span() -> usize {
    20
}

fn default_wma_window() -> usize {
    15
}

fn default_hma_window() -> usize {
    9
}

fn default_oscillator_period() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

// =============================================================================
// Timeframe
// =============================================================================

/// One trailing analysis window: a display label and its length in trading
/// days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeframe {
    pub label: String,
    pub days: usize,
}

impl Timeframe {
    pub fn new(label: impl Into<String>, days: usize) -> Self {
        Self {
            label: label.into(),
            days,
        }
    }
}

// =============================================================================
// IndicatorParams
// =============================================================================

/// Look-back parameters for the indicator library.
///
/// Defaults match the windows the production analysis has always used:
/// SMA 10, EMA 20, WMA 15, HMA 9, 14-period oscillators, MACD 12/26.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    #[serde(default = "default_sma_window")]
    pub sma_window: usize,

    #[serde(default = "default_ema_span")]
    pub ema_span: usize,

    #[serde(default = "default_wma_window")]
    pub wma_window: usize,

    #[serde(default = "default_hma_window")]
    pub hma_window: usize,

    #[serde(default = "default_oscillator_period")]
    pub rsi_period: usize,

    #[serde(default = "default_oscillator_period")]
    pub stochastic_period: usize,

    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    #[serde(default = "default_oscillator_period")]
    pub williams_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_window: default_sma_window(),
            ema_span: default_ema_span(),
            wma_window: default_wma_window(),
            hma_window: default_hma_window(),
            rsi_period: default_oscillator_period(),
            stochastic_period: default_oscillator_period(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            williams_period: default_oscillator_period(),
        }
    }
}

// =============================================================================
// AnalysisConfig
// =============================================================================

/// Full configuration for one analysis run: which trailing windows to
/// evaluate, in which order, and the indicator look-backs to use inside
/// each window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Evaluated in order; report entries keep this order.
    #[serde(default = "default_timeframes")]
    pub timeframes: Vec<Timeframe>,

    #[serde(default)]
    pub indicators: IndicatorParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timeframes: default_timeframes(),
            indicators: IndicatorParams::default(),
        }
    }
}
