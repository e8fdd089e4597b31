// =============================================================================
// Williams %R
// =============================================================================
//
// Measures how close the latest close sits to the recent high:
//   %R = ((max(high, p) - close) / (max(high, p) - min(low, p))) * -100
//
// Bounded in [-100, 0]: 0 means the close is the period high, -100 the
// period low.
//
// Thresholds downstream:  %R > -20 => sell,  %R < -80 => buy.

use super::{window_max, window_min, IndicatorSeries};

/// Compute the Williams %R series over `period` bars.
///
/// `highs` and `lows` are per-bar optionals aligned with `closes`; a window
/// with any missing high or low produces `None`, as does a zero-width range.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period` => all-`None` series
pub fn williams_r(
    closes: &[f64],
    highs: &[Option<f64>],
    lows: &[Option<f64>],
    period: usize,
) -> IndicatorSeries {
    debug_assert_eq!(closes.len(), highs.len());
    debug_assert_eq!(closes.len(), lows.len());

    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return result;
    }

    for i in (period - 1)..closes.len() {
        let start = i + 1 - period;
        let Some(highest) = window_max(&highs[start..=i]) else {
            continue;
        };
        let Some(lowest) = window_min(&lows[start..=i]) else {
            continue;
        };

        let range = highest - lowest;
        if range == 0.0 {
            continue;
        }
        let r = ((highest - closes[i]) / range) * -100.0;
        if r.is_finite() {
            result[i] = Some(r);
        }
    }
    result
}
