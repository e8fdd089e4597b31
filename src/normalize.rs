// =============================================================================
// Series normalization — raw scraped records to a clean PriceSeries
// =============================================================================
//
// Upstream suppliers (scraped HTML tables, CSV exports, JSON payloads) hand
// over rows whose values may be strings or numbers, with locale-formatted
// prices ("21.300,00" as well as "21,300.00") and an %m/%d/%Y date column.
//
// Row policy:
//   - unparseable date or close  => the row is dropped (logged, non-fatal)
//   - unparseable high/low/volume => that field becomes None, the row stays
//   - zero surviving rows        => NormalizeError::EmptyInput (fatal)
//
// Duplicate dates keep the later-seen row; output is sorted ascending.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::series::{PriceBar, PriceSeries};

/// Date format the upstream source emits, e.g. `11/29/2024`.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Fatal normalization failures.
///
/// Individually malformed rows are a data-quality issue and never surface
/// here; only a payload with no usable rows at all is an error.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// No record survived parsing; nothing to analyze.
    #[error("no records survived normalization")]
    EmptyInput,

    /// The payload itself was not a JSON array of records.
    #[error("malformed raw record payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A raw field value as it arrives from upstream: either already numeric or
/// a string to be parsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

/// One raw row of market data.
///
/// Serde aliases match the column names of the original data source, so both
/// scraped-table rows (`"Avg Price"`, `"Max"`, `"Min"`) and snake_case JSON
/// deserialize without a mapping step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "Date")]
    pub date: Option<RawField>,

    #[serde(default, alias = "Avg Price", alias = "avg_price")]
    pub close: Option<RawField>,

    #[serde(default, alias = "Max")]
    pub high: Option<RawField>,

    #[serde(default, alias = "Min")]
    pub low: Option<RawField>,

    #[serde(default, alias = "Volume")]
    pub volume: Option<RawField>,
}

/// Normalize raw records into a validated [`PriceSeries`].
///
/// Pure transformation: sorting, deduplication (later-seen wins) and field
/// parsing only, no I/O.
pub fn normalize(records: &[RawRecord]) -> Result<PriceSeries, NormalizeError> {
    let mut bars = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let date = match record.date.as_ref().and_then(parse_date) {
            Some(d) => d,
            None => {
                dropped += 1;
                warn!(record = ?record.date, "dropping record with unparseable date");
                continue;
            }
        };

        let close = match record.close.as_ref().and_then(parse_price) {
            Some(c) => c,
            None => {
                dropped += 1;
                warn!(date = %date, "dropping record with unparseable close price");
                continue;
            }
        };

        bars.push(PriceBar {
            date,
            close,
            high: record.high.as_ref().and_then(parse_price),
            low: record.low.as_ref().and_then(parse_price),
            volume: record.volume.as_ref().and_then(parse_volume),
        });
    }

    let series = PriceSeries::from_bars(bars);
    debug!(
        kept = series.len(),
        dropped,
        total = records.len(),
        "normalization complete"
    );

    if series.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }
    Ok(series)
}

/// Parse a JSON array of raw records and normalize it.
///
/// Numeric fields may arrive as JSON numbers or as locale-formatted strings;
/// both forms are handled by [`normalize`].
pub fn normalize_json_records(payload: &str) -> Result<PriceSeries, NormalizeError> {
    let records: Vec<RawRecord> = serde_json::from_str(payload)?;
    normalize(&records)
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

fn parse_date(field: &RawField) -> Option<chrono::NaiveDate> {
    match field {
        RawField::Text(s) => chrono::NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
        RawField::Number(_) => None,
    }
}

/// Parse a price field, returning `None` unless the result is a finite,
/// strictly positive number.
fn parse_price(field: &RawField) -> Option<f64> {
    let value = match field {
        RawField::Number(n) => *n,
        RawField::Text(s) => parse_decimal(s)?,
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Parse a volume field as a non-negative integer count.
fn parse_volume(field: &RawField) -> Option<u64> {
    let value = match field {
        RawField::Number(n) => *n,
        RawField::Text(s) => parse_decimal(s)?,
    };
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as u64)
}

/// Parse a locale-tolerant decimal string.
///
/// Accepts both `.` and `,` as decimal separator, tolerates thousands
/// separators and surrounding currency/percent symbols.  Separator rule:
/// when both kinds appear, the later one is the decimal separator; a single
/// separator followed by exactly three digits is a thousands separator,
/// anything else is a decimal point.
fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let dots = cleaned.matches('.').count();
    let commas = cleaned.matches(',').count();

    let canonical = if dots > 0 && commas > 0 {
        let decimal_is_comma = cleaned.rfind(',') > cleaned.rfind('.');
        if decimal_is_comma {
            cleaned.replace('.', "").replace(',', ".")
        } else {
            cleaned.replace(',', "")
        }
    } else if commas > 0 {
        canonicalize_single_separator(&cleaned, ',')
    } else if dots > 0 {
        canonicalize_single_separator(&cleaned, '.')
    } else {
        cleaned
    };

    canonical.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolve a string containing only one kind of separator into a plain
/// `1234.56`-style decimal.
fn canonicalize_single_separator(s: &str, sep: char) -> String {
    let count = s.matches(sep).count();
    if count > 1 {
        // Repeated separator can only be grouping: "1.234.567".
        return s.replace(sep, "");
    }
    let digits_after = s.rsplit(sep).next().map_or(0, |tail| tail.len());
    if digits_after == 3 {
        // "21.300" / "1,300" -- grouping by convention.
        s.replace(sep, "")
    } else {
        s.replace(sep, ".")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
