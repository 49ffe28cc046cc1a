// File: crates/axis-core/src/lib.rs
// Summary: Core library entry point; exports the axis data-preparation pipeline.

pub mod aggregate;
pub mod error;
pub mod granularity;
pub mod label;
pub mod sample;
pub mod split;
pub mod ticks;
pub mod types;

pub use aggregate::aggregate_buckets;
pub use error::AxisError;
pub use granularity::Granularity;
pub use label::{build_labels, date_label, plain_label};
pub use sample::{generate_series, series_epoch};
pub use split::split_label;
pub use ticks::{select_ticks, DEFAULT_DIVISIONS};
pub use types::{AggregatedPoint, Sample, TickLabel, VALUE_MAX, VALUE_MIN};
