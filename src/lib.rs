// =============================================================================
// Tidemark — technical indicator engine for daily price bars
// =============================================================================
//
// Raw records flow strictly upward:
//   raw records -> PriceSeries -> (per timeframe) indicator values
//               -> per-indicator votes -> aggregated signal -> AnalysisReport
//
// The engine is purely functional over an immutable input series: no I/O, no
// shared state, no locking.  Callers own the series for the duration of one
// call and may run timeframes or instruments in parallel if they wish.

//! Multi-timeframe technical analysis over daily price bars.
//!
//! ```
//! use tidemark::{assemble, normalize_json_records, AnalysisConfig};
//!
//! let payload = r#"[
//!     { "Date": "11/28/2024", "Avg Price": "21.150,00", "Max": "21.400,00", "Min": "21.000,00" },
//!     { "Date": "11/29/2024", "Avg Price": "21.300,00", "Max": "21.500,00", "Min": "21.100,00" }
//! ]"#;
//!
//! let series = normalize_json_records(payload)?;
//! let report = assemble(&series, &AnalysisConfig::default());
//!
//! // Two bars fill the one-day window; the one-month window is omitted.
//! assert!(report.get("1 day").is_some());
//! assert!(report.get("1 month").is_none());
//! # Ok::<(), tidemark::NormalizeError>(())
//! ```

pub mod classify;
pub mod config;
pub mod indicators;
pub mod normalize;
pub mod report;
pub mod series;
pub mod timeframe;
pub mod types;

pub use config::{AnalysisConfig, IndicatorParams, Timeframe};
pub use indicators::{IndicatorKind, IndicatorSeries};
pub use normalize::{normalize, normalize_json_records, NormalizeError, RawField, RawRecord};
pub use report::{assemble, AnalysisReport};
pub use series::{PriceBar, PriceSeries};
pub use timeframe::{analyze, TimeframeResult};
pub use types::Signal;
