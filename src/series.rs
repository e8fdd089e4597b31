// =============================================================================
// Price series data model
// =============================================================================
//
// `PriceBar` is one trading day of market data; `PriceSeries` is a validated,
// chronologically ordered sequence of bars.  The series is the only input the
// indicator engine reads, and it is never mutated -- every derived value is a
// fresh allocation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single daily OHLC-style bar.
///
/// `close` is the traded price every indicator runs on (the upstream data
/// source labels this column "Avg Price").  `high`, `low` and `volume` are
/// optional: a row whose auxiliary fields could not be parsed keeps `None`
/// there rather than being discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<u64>,
}

/// Ordered sequence of [`PriceBar`]s, strictly increasing by date.
///
/// Construction goes through [`PriceSeries::from_bars`], which sorts by date
/// and keeps the later-seen bar on duplicate dates, so the ordering invariant
/// holds for every reachable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars in any order.
    ///
    /// Bars are sorted ascending by date; when two bars share a date the one
    /// appearing later in `bars` wins.
    pub fn from_bars(bars: Vec<PriceBar>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, PriceBar> = BTreeMap::new();
        for bar in bars {
            by_date.insert(bar.date, bar);
        }
        Self {
            bars: by_date.into_values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The most recent bar, if any.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Close prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Daily highs in chronological order; `None` where the source row had no
    /// parseable high.
    pub fn highs(&self) -> Vec<Option<f64>> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Daily lows in chronological order.
    pub fn lows(&self) -> Vec<Option<f64>> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// The trailing `count` bars as a fresh series (the whole series when
    /// `count >= len`).  The sub-series carries its own history: rolling
    /// computations over it warm up from its first bar.
    pub fn tail(&self, count: usize) -> PriceSeries {
        let start = self.bars.len().saturating_sub(count);
        Self {
            bars: self.bars[start..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close,
            high: Some(close + 1.0),
            low: Some(close - 1.0),
            volume: Some(100),
        }
    }

    #[test]
    fn from_bars_sorts_by_date() {
        let series = PriceSeries::from_bars(vec![
            bar("2024-01-03", 3.0),
            bar("2024-01-01", 1.0),
            bar("2024-01-02", 2.0),
        ]);
        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_bars_duplicate_dates_later_wins() {
        let series = PriceSeries::from_bars(vec![
            bar("2024-01-01", 1.0),
            bar("2024-01-01", 9.0),
        ]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.closes(), vec![9.0]);
    }

    #[test]
    fn tail_returns_trailing_window() {
        let series = PriceSeries::from_bars(vec![
            bar("2024-01-01", 1.0),
            bar("2024-01-02", 2.0),
            bar("2024-01-03", 3.0),
        ]);
        assert_eq!(series.tail(2).closes(), vec![2.0, 3.0]);
        // Oversized count returns everything.
        assert_eq!(series.tail(10).len(), 3);
    }

    #[test]
    fn last_on_empty_is_none() {
        let series = PriceSeries::from_bars(Vec::new());
        assert!(series.last().is_none());
        assert!(series.is_empty());
    }
}
