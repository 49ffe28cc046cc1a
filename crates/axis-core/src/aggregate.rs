// File: crates/axis-core/src/aggregate.rs
// Summary: Collapses a daily series into fixed-width buckets of rounded means.

use tracing::debug;

use crate::granularity::Granularity;
use crate::types::{AggregatedPoint, Sample};

/// Aggregate `samples` into contiguous buckets of the granularity's
/// effective width, one point per bucket.
///
/// For each bucket: date = first sample's date, value = rounded mean of the
/// bucket's values. The final bucket may be shorter than the nominal width.
/// `Day` is the identity partition (one bucket per sample). Output length is
/// `ceil(samples.len() / width)`.
pub fn aggregate_buckets(samples: &[Sample], granularity: Granularity) -> Vec<AggregatedPoint> {
    let out: Vec<AggregatedPoint> = match granularity {
        Granularity::Day => samples
            .iter()
            .map(|s| AggregatedPoint { date: s.date, value: s.value })
            .collect(),
        other => {
            let width = other.bucket_width();
            samples
                .chunks(width)
                .map(|chunk| {
                    let sum: i64 = chunk.iter().map(|s| s.value).sum();
                    // f64::round is half-away-from-zero, matching the
                    // original rounding of bucket means.
                    let mean = (sum as f64 / chunk.len() as f64).round() as i64;
                    AggregatedPoint { date: chunk[0].date, value: mean }
                })
                .collect()
        }
    };
    debug!(samples = samples.len(), buckets = out.len(), ?granularity, "aggregated series");
    out
}
