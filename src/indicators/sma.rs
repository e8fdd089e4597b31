// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the last `window` closes:
//   SMA_t = (close_{t-w+1} + ... + close_t) / w
//
// Trailing, inclusive window ending at the current index.

use super::IndicatorSeries;

/// Compute the SMA series for the given `closes` and `window`.
///
/// The output is aligned 1:1 with `closes`; positions before the window is
/// filled are `None`.
///
/// # Edge cases
/// - `window == 0` or `closes.len() < window` => all-`None` series
/// - Non-finite results become `None` at that position.
pub fn simple_moving_average(closes: &[f64], window: usize) -> IndicatorSeries {
    let mut result = vec![None; closes.len()];
    if window == 0 || closes.len() < window {
        return result;
    }

    for i in (window - 1)..closes.len() {
        let mean = closes[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
        if mean.is_finite() {
            result[i] = Some(mean);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_empty_input() {
        assert!(simple_moving_average(&[], 5).iter().all(Option::is_none));
    }

    #[test]
    fn sma_window_zero() {
        let out = simple_moving_average(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out, vec![None, None, None]);
    }

    #[test]
    fn sma_insufficient_data() {
        let out = simple_moving_average(&[1.0, 2.0], 5);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn sma_known_values() {
        // Mean of 1..=10 over the full window is exactly 5.5.
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let out = simple_moving_average(&closes, 10);
        assert_eq!(out[..9], vec![None; 9]);
        assert_eq!(out[9], Some(5.5));
    }

    #[test]
    fn sma_rolls_forward() {
        let closes = vec![2.0, 4.0, 6.0, 8.0];
        let out = simple_moving_average(&closes, 2);
        assert_eq!(out, vec![None, Some(3.0), Some(5.0), Some(7.0)]);
    }

    #[test]
    fn sma_nan_input_is_undefined() {
        let closes = vec![1.0, f64::NAN, 3.0];
        let out = simple_moving_average(&closes, 2);
        assert_eq!(out[1], None);
        assert_eq!(out[2], None);
    }
}
