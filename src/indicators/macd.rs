// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// Difference of a fast and a slow EMA of the closes:
//   MACD_t = EMA(fast)_t - EMA(slow)_t
//
// Both EMAs use the first-close-seeded recurrence from the EMA module; the
// value is reported once the slow span is filled.
//
// Thresholds downstream:  MACD > 0 => buy,  MACD < 0 => sell.

use super::ema::ema_line;
use super::IndicatorSeries;

/// Compute the MACD line for the given `closes` and `fast`/`slow` spans.
///
/// Aligned 1:1 with `closes`; positions before index `slow - 1` are `None`.
///
/// # Edge cases
/// - zero spans, `fast >= slow`, or `closes.len() < slow` => all-`None` series
/// - Non-finite results become `None` at that position.
pub fn macd_line(closes: &[f64], fast: usize, slow: usize) -> IndicatorSeries {
    let mut result = vec![None; closes.len()];
    if fast == 0 || slow == 0 || fast >= slow || closes.len() < slow {
        return result;
    }

    let fast_line = ema_line(closes, fast);
    let slow_line = ema_line(closes, slow);

    for i in (slow - 1)..closes.len() {
        let value = fast_line[i] - slow_line[i];
        if value.is_finite() {
            result[i] = Some(value);
        }
    }
    result
}
