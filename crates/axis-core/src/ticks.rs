// File: crates/axis-core/src/ticks.rs
// Summary: Selects the sparse, evenly-strided subset of points that carry labels.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{AxisError, Result};
use crate::types::AggregatedPoint;

/// Default number of axis divisions a series is strided into.
pub const DEFAULT_DIVISIONS: usize = 10;

/// Pick the dates of every `stride`-th point, `stride = ceil(len / divisions)`,
/// starting at index 0.
///
/// The first point's date is always included; roughly `divisions` ticks come
/// back (fewer for short series). Labeling every aggregated point is
/// deliberately avoided to control axis density.
pub fn select_ticks(points: &[AggregatedPoint], divisions: usize) -> Result<Vec<NaiveDate>> {
    if divisions == 0 {
        return Err(AxisError::InvalidInput("divisions must be positive"));
    }
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let stride = points.len().div_ceil(divisions);
    let ticks: Vec<NaiveDate> = points.iter().step_by(stride).map(|p| p.date).collect();
    debug!(points = points.len(), stride, ticks = ticks.len(), "selected axis ticks");
    Ok(ticks)
}
