// =============================================================================
// Report assembly — all configured timeframes, one structured report
// =============================================================================
//
// Runs the timeframe analyzer once per configured window, in configuration
// order.  Timeframes are independent: a window the series cannot fill is
// omitted from the report and never affects its neighbours.
//
// The report serializes as a JSON map whose keys keep configuration order,
// so identical inputs produce byte-identical output.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::series::PriceSeries;
use crate::timeframe::{analyze, TimeframeResult};

/// Ordered collection of per-timeframe results, keyed by timeframe label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisReport {
    entries: Vec<(String, TimeframeResult)>,
}

impl AnalysisReport {
    /// Look up a timeframe by its label.
    pub fn get(&self, label: &str) -> Option<&TimeframeResult> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, result)| result)
    }

    /// Labels present in the report, in configuration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimeframeResult)> + '_ {
        self.entries
            .iter()
            .map(|(label, result)| (label.as_str(), result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AnalysisReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, result) in &self.entries {
            map.serialize_entry(label, result)?;
        }
        map.end()
    }
}

/// Run the full analysis over every configured timeframe.
///
/// Deterministic and side-effect free: the same series and config always
/// assemble the same report.
pub fn assemble(series: &PriceSeries, config: &AnalysisConfig) -> AnalysisReport {
    let mut entries = Vec::with_capacity(config.timeframes.len());

    for timeframe in &config.timeframes {
        match analyze(series, timeframe.days, &config.indicators) {
            Some(result) => entries.push((timeframe.label.clone(), result)),
            None => debug!(
                label = %timeframe.label,
                days = timeframe.days,
                "timeframe omitted from report"
            ),
        }
    }

    AnalysisReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::PriceBar;
    use chrono::NaiveDate;

    fn series(days: usize) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..days)
            .map(|i| {
                let close = 100.0 + 0.5 * i as f64;
                PriceBar {
                    date: start + chrono::Days::new(i as u64),
                    close,
                    high: Some(close + 1.0),
                    low: Some(close - 1.0),
                    volume: Some(500),
                }
            })
            .collect();
        PriceSeries::from_bars(bars)
    }

    #[test]
    fn short_series_omits_long_timeframes() {
        let report = assemble(&series(5), &AnalysisConfig::default());

        assert!(report.get("1 day").is_some());
        assert!(report.get("1 week").is_some());
        assert!(report.get("1 month").is_none());
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn full_series_fills_every_timeframe() {
        let report = assemble(&series(30), &AnalysisConfig::default());
        assert_eq!(
            report.labels().collect::<Vec<_>>(),
            vec!["1 day", "1 week", "1 month"]
        );
    }

    #[test]
    fn entries_keep_configuration_order() {
        let mut config = AnalysisConfig::default();
        config.timeframes.reverse();
        let report = assemble(&series(30), &config);
        assert_eq!(
            report.labels().collect::<Vec<_>>(),
            vec!["1 month", "1 week", "1 day"]
        );
    }

    #[test]
    fn assemble_is_idempotent_and_byte_identical() {
        let s = series(30);
        let config = AnalysisConfig::default();

        let first = assemble(&s, &config);
        let second = assemble(&s, &config);
        assert_eq!(first, second);

        let json_a = serde_json::to_string(&first).unwrap();
        let json_b = serde_json::to_string(&second).unwrap();
        assert_eq!(json_a, json_b);
    }

    #[test]
    fn report_serializes_as_ordered_map() {
        let report = assemble(&series(30), &AnalysisConfig::default());
        let json = serde_json::to_string(&report).unwrap();

        let day = json.find("\"1 day\"").unwrap();
        let week = json.find("\"1 week\"").unwrap();
        let month = json.find("\"1 month\"").unwrap();
        assert!(day < week && week < month);

        // Spot-check the per-timeframe payload shape.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["1 day"];
        assert!(entry["avgPrice"].is_number());
        assert!(entry["sma"].is_null());
        assert_eq!(entry["signal"], "hold");
    }

    #[test]
    fn empty_config_yields_empty_report() {
        let config = AnalysisConfig {
            timeframes: Vec::new(),
            ..AnalysisConfig::default()
        };
        let report = assemble(&series(30), &config);
        assert!(report.is_empty());
    }
}
