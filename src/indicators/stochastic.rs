// =============================================================================
// Stochastic Oscillator (%K)
// =============================================================================
//
// Locates the close within the recent high/low range:
//   %K = 100 * (close - min(low, p)) / (max(high, p) - min(low, p))
//
// Thresholds downstream:  %K > 80 => sell,  %K < 20 => buy.

use super::{window_max, window_min, IndicatorSeries};

/// Compute the %K series over `period` bars.
///
/// `highs` and `lows` are per-bar optionals aligned with `closes`; a window
/// containing any missing high or low produces `None`, as does a zero-width
/// range (period high equal to period low).
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period` => all-`None` series
pub fn stochastic_k(
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
        let k = 100.0 * (closes[i] - lowest) / range;
        if k.is_finite() {
            result[i] = Some(k);
        }
    }
    result
}
