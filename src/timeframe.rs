// =============================================================================
// Timeframe analysis — one trailing window, full indicator set, one signal
// =============================================================================
//
// Selects the trailing `window_len` bars of a series, runs the whole
// indicator registry against that sub-window (which warms up from its own
// first bar), classifies the signal-bearing indicators and aggregates them
// by majority vote.
//
// Insufficient history is an expected, non-fatal outcome: the analyzer
// returns `None` and the caller omits the timeframe.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::classify::{classify, majority_vote};
use crate::config::IndicatorParams;
use crate::indicators::IndicatorKind;
use crate::series::PriceSeries;
use crate::types::Signal;

/// Snapshot of one analyzed timeframe: the latest bar's date and price, the
/// latest value of each indicator (two-decimal rounded, absent while warming
/// up) and the aggregated signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeResult {
    pub date: NaiveDate,
    pub avg_price: f64,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub wma: Option<f64>,
    pub hma: Option<f64>,
    pub rsi: Option<f64>,
    pub stochastic: Option<f64>,
    pub macd: Option<f64>,
    pub williams_r: Option<f64>,
    pub signal: Signal,
}

/// Analyze the trailing `window_len` bars of `series`.
///
/// Returns `None` when the series is shorter than the requested window (or
/// the window is zero), never an error.  All indicator computations run
/// against the sub-window only, so a one-day window genuinely has no moving
/// averages to report.
pub fn analyze(
    series: &PriceSeries,
    window_len: usize,
    params: &IndicatorParams,
) -> Option<TimeframeResult> {
    if window_len == 0 || series.len() < window_len {
        debug!(
            window = window_len,
            available = series.len(),
            "timeframe analysis skipped: insufficient history"
        );
        return None;
    }

    let window = series.tail(window_len);
    let latest = window.last()?;

    // Latest value per indicator, in registry order.
    let latest_values: Vec<(IndicatorKind, Option<f64>)> = IndicatorKind::ALL
        .into_iter()
        .map(|kind| {
            let value = kind.compute(&window, params).last().copied().flatten();
            (kind, value)
        })
        .collect();

    let votes: Vec<Signal> = latest_values
        .iter()
        .filter(|(kind, _)| kind.classifier().is_some())
        .map(|&(kind, value)| classify(kind, value))
        .collect();
    let signal = majority_vote(&votes);

    let value_of = |wanted: IndicatorKind| -> Option<f64> {
        latest_values
            .iter()
            .find(|(kind, _)| *kind == wanted)
            .and_then(|(_, value)| *value)
            .map(round2)
    };

    debug!(
        window = window_len,
        date = %latest.date,
        signal = %signal,
        "timeframe analysis complete"
    );

    Some(TimeframeResult {
        date: latest.date,
        avg_price: round2(latest.close),
        sma: value_of(IndicatorKind::Sma),
        ema: value_of(IndicatorKind::Ema),
        wma: value_of(IndicatorKind::Wma),
        hma: value_of(IndicatorKind::Hma),
        rsi: value_of(IndicatorKind::Rsi),
        stochastic: value_of(IndicatorKind::Stochastic),
        macd: value_of(IndicatorKind::Macd),
        williams_r: value_of(IndicatorKind::WilliamsR),
        signal,
    })
}

/// Round to two decimal places for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
