// =============================================================================
// Signal classification — per-indicator thresholds and majority vote
// =============================================================================
//
// Each signal-bearing indicator maps its latest value to one vote:
//   RSI:          > 70 sell,  < 30 buy
//   Stochastic:   > 80 sell,  < 20 buy
//   MACD:         > 0  buy,   < 0  sell
//   Williams %R:  > -20 sell, < -80 buy
//
// An undefined value is always a `Hold` vote.  The aggregate is a strict
// plurality: buy (or sell) only when its count exceeds both other counts,
// every tie resolving to hold.

use crate::indicators::IndicatorKind;
use crate::types::Signal;

pub fn rsi_signal(value: f64) -> Signal {
    if value > 70.0 {
        Signal::Sell
    } else if value < 30.0 {
        Signal::Buy
    } else {
        Signal::Hold
    }
}

pub fn stochastic_signal(value: f64) -> Signal {
    if value > 80.0 {
        Signal::Sell
    } else if value < 20.0 {
        Signal::Buy
    } else {
        Signal::Hold
    }
}

pub fn macd_signal(value: f64) -> Signal {
    if value > 0.0 {
        Signal::Buy
    } else if value < 0.0 {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

pub fn williams_signal(value: f64) -> Signal {
    if value > -20.0 {
        Signal::Sell
    } else if value < -80.0 {
        Signal::Buy
    } else {
        Signal::Hold
    }
}

/// Classify one indicator value into a vote.
///
/// Value-only indicators (the moving averages) and undefined values always
/// return `Hold`.
pub fn classify(kind: IndicatorKind, value: Option<f64>) -> Signal {
    match (kind.classifier(), value) {
        (Some(threshold), Some(v)) => threshold(v),
        _ => Signal::Hold,
    }
}

/// Aggregate individual votes by strict plurality.
///
/// Count-based, so the result never depends on vote order; ties of any kind
/// resolve to `Hold`.
pub fn majority_vote(votes: &[Signal]) -> Signal {
    let buys = votes.iter().filter(|v| **v == Signal::Buy).count();
    let sells = votes.iter().filter(|v| **v == Signal::Sell).count();
    let holds = votes.iter().filter(|v| **v == Signal::Hold).count();

    if buys > sells && buys > holds {
        Signal::Buy
    } else if sells > buys && sells > holds {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
