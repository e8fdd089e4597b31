// =============================================================================
// Weighted Moving Average (WMA)
// =============================================================================
//
// Linearly-weighted mean of the last `window` closes, weight 1 for the oldest
// point up to `window` for the newest:
//   WMA_t = Σ(k * close_k) / Σ(k),  k = 1..w

use super::IndicatorSeries;

/// Compute the WMA series for the given `closes` and `window`.
///
/// Aligned 1:1 with `closes`; positions before the window is filled are
/// `None`.
///
/// # Edge cases
/// - `window == 0` or `closes.len() < window` => all-`None` series
/// - Non-finite results become `None` at that position.
pub fn weighted_moving_average(closes: &[f64], window: usize) -> IndicatorSeries {
    let mut result = vec![None; closes.len()];
    if window == 0 || closes.len() < window {
        return result;
    }

    // Σ(k) for k = 1..w
    let weight_sum = (window * (window + 1)) as f64 / 2.0;

    for i in (window - 1)..closes.len() {
        let weighted: f64 = closes[i + 1 - window..=i]
            .iter()
            .enumerate()
            .map(|(k, &close)| (k + 1) as f64 * close)
            .sum();
        let value = weighted / weight_sum;
        if value.is_finite() {
            result[i] = Some(value);
        }
    }
    result
}
