// =============================================================================
// Relative Strength Index (RSI) — rolling-mean variant
// =============================================================================
//
// Measures the balance of recent gains against recent losses:
//   avg_gain = mean of the zero-floored positive close deltas over `period`
//   avg_loss = mean of the zero-floored negative delta magnitudes
//   RS  = avg_gain / avg_loss
//   RSI = 100 - 100 / (1 + RS)
//
// Plain rolling means, not Wilder smoothing.  A completely flat window has
// no gain and no loss, so its RSI is undefined rather than pinned to a
// neutral constant.
//
// Thresholds downstream:  RSI > 70 => sell,  RSI < 30 => buy.

use super::IndicatorSeries;

/// Compute the RSI series for the given `closes` and `period`.
///
/// Aligned 1:1 with `closes`; the first `period` positions are `None`
/// (a delta needs two closes, and the mean needs `period` deltas).
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period + 1` => all-`None` series
/// - avg_loss == 0 and avg_gain == 0 => `None` (flat window)
/// - avg_loss == 0 and avg_gain > 0  => 100.0 (pure uptrend)
pub fn relative_strength_index(closes: &[f64], period: usize) -> IndicatorSeries {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return result;
    }

    for i in period..closes.len() {
        // `period + 1` closes ending at i yield exactly `period` deltas.
        let window = &closes[i - period..=i];

        let (gain_sum, loss_sum) = window.windows(2).fold((0.0_f64, 0.0_f64), |(g, l), w| {
            let delta = w[1] - w[0];
            if delta > 0.0 {
                (g + delta, l)
            } else {
                (g, l + delta.abs())
            }
        });

        let avg_gain = gain_sum / period as f64;
        let avg_loss = loss_sum / period as f64;

        result[i] = if avg_loss == 0.0 && avg_gain == 0.0 {
            None
        } else if avg_loss == 0.0 {
            Some(100.0)
        } else {
            let rs = avg_gain / avg_loss;
            let rsi = 100.0 - 100.0 / (1.0 + rs);
            rsi.is_finite().then_some(rsi)
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(relative_strength_index(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        let out = relative_strength_index(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out, vec![None, None, None]);
    }

    #[test]
    fn rsi_insufficient_data() {
        // 14 closes => 13 deltas, not enough for period 14.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(relative_strength_index(&closes, 14)
            .iter()
            .all(Option::is_none));
    }

    #[test]
    fn rsi_warm_up_boundary() {
        // 15 closes => first value lands exactly at index 14.
        let closes: Vec<f64> = (1..=15).map(|x| x as f64).collect();
        let out = relative_strength_index(&closes, 14);
        assert_eq!(out[..14], vec![None; 14]);
        assert!(out[14].is_some());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = relative_strength_index(&closes, 14);
        for v in out[14..].iter() {
            assert!((v.unwrap() - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let out = relative_strength_index(&closes, 14);
        for v in out[14..].iter() {
            assert!(v.unwrap().abs() < 1e-10);
        }
    }

    #[test]
    fn rsi_flat_window_is_undefined() {
        let closes = vec![100.0; 30];
        let out = relative_strength_index(&closes, 14);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let out = relative_strength_index(&closes, 14);
        for v in out.iter().flatten() {
            assert!((0.0..=100.0).contains(v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_balanced_window_is_50() {
        // Alternating +1/-1 deltas: equal gains and losses.
        let closes: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let out = relative_strength_index(&closes, 14);
        assert!((out[19].unwrap() - 50.0).abs() < 1e-10);
    }
}
