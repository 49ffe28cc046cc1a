// File: crates/axis-core/src/sample.rs
// Summary: Synthetic daily-series generator (stand-in for a real data source).

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::error::{AxisError, Result};
use crate::types::{Sample, VALUE_MAX, VALUE_MIN};

/// Fixed first day of every generated series.
pub fn series_epoch() -> NaiveDate {
    // Infallible: the literal is a valid calendar day.
    NaiveDate::from_ymd_opt(2017, 11, 1).expect("fixed epoch is a valid date")
}

/// Generate `total` consecutive daily samples starting at [`series_epoch`],
/// values drawn uniformly from `[VALUE_MIN, VALUE_MAX]`.
///
/// Values are random; callers should rely only on the structural contract
/// (length, date monotonicity, value range).
pub fn generate_series(total: usize) -> Result<Vec<Sample>> {
    if total == 0 {
        return Err(AxisError::InvalidInput("total must be positive"));
    }

    let epoch = series_epoch();
    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(total);
    for n in 0..total {
        let date = epoch
            .checked_add_days(Days::new(n as u64))
            .ok_or(AxisError::InvalidInput("total exceeds supported calendar range"))?;
        out.push(Sample {
            date,
            value: rng.gen_range(VALUE_MIN..=VALUE_MAX),
        });
    }
    Ok(out)
}
