// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// Exponential smoothing with factor α = 2 / (span + 1), seeded by the first
// available close:
//   ema[0] = close[0]
//   ema[i] = close[i] * α + ema[i-1] * (1 - α)
//
// The recurrence runs from the start of the series, but reported values stay
// undefined until the span is filled -- a one-bar window has no meaningful
// 20-day average.

use super::IndicatorSeries;

/// Raw EMA recurrence over `closes`, one value per input position.
///
/// Shared with the MACD computation, which differences two of these lines.
pub(crate) fn ema_line(closes: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || closes.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span + 1) as f64;
    let mut line = Vec::with_capacity(closes.len());
    let mut prev = closes[0];
    line.push(prev);

    for &close in &closes[1..] {
        let ema = close * alpha + prev * (1.0 - alpha);
        line.push(ema);
        prev = ema;
    }
    line
}

/// Compute the EMA series for the given `closes` and smoothing `span`.
///
/// Aligned 1:1 with `closes`; positions before index `span - 1` are `None`.
///
/// # Edge cases
/// - `span == 0` or `closes.len() < span` => all-`None` series
/// - Non-finite recurrence values become `None` at that position.
pub fn exponential_moving_average(closes: &[f64], span: usize) -> IndicatorSeries {
    let mut result = vec![None; closes.len()];
    if span == 0 || closes.len() < span {
        return result;
    }

    let line = ema_line(closes, span);
    for i in (span - 1)..closes.len() {
        if line[i].is_finite() {
            result[i] = Some(line[i]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_empty_input() {
        assert!(exponential_moving_average(&[], 5).is_empty());
    }

    #[test]
    fn ema_span_zero() {
        let out = exponential_moving_average(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out, vec![None, None, None]);
    }

    #[test]
    fn ema_insufficient_data() {
        let out = exponential_moving_average(&[1.0, 2.0], 5);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn ema_recurrence_from_first_close() {
        // span 3 => alpha = 0.5; seed 2.0
        // line: 2.0, 4*0.5+2*0.5=3.0, 6*0.5+3*0.5=4.5
        let out = exponential_moving_average(&[2.0, 4.0, 6.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!((out[2].unwrap() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // span 5 over 1..=10, alpha = 1/3, seeded with 1.0.
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let out = exponential_moving_average(&closes, 5);
        assert_eq!(out[..4], vec![None; 4]);

        let alpha = 2.0 / 6.0;
        let mut expected = 1.0;
        for &c in &closes[1..] {
            expected = c * alpha + expected * (1.0 - alpha);
        }
        assert!((out[9].unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn ema_flat_series_equals_price() {
        let closes = vec![100.0; 30];
        let out = exponential_moving_average(&closes, 20);
        assert_eq!(out[..19], vec![None; 19]);
        for v in out[19..].iter() {
            assert!((v.unwrap() - 100.0).abs() < 1e-10);
        }
    }
}
