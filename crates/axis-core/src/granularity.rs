// File: crates/axis-core/src/granularity.rs
// Summary: Bucket-size enumeration with wire conversion and picker helpers.

use crate::error::{AxisError, Result};

/// Nominal bucket size for aggregation and label grouping.
///
/// The wire representation is the nominal day count {1, 7, 30, 90, 365};
/// the effective aggregation width differs only for `Month` (see
/// [`Granularity::bucket_width`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Granularity {
    /// All levels, coarsening left to right.
    pub const ALL: [Granularity; 5] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
    ];

    /// Nominal day count exchanged across the API boundary.
    pub const fn days(self) -> i64 {
        match self {
            Granularity::Day => 1,
            Granularity::Week => 7,
            Granularity::Month => 30,
            Granularity::Quarter => 90,
            Granularity::Year => 365,
        }
    }

    /// Effective bucket width in samples.
    ///
    /// `Month` aggregates 31 samples per bucket even though its nominal
    /// count is 30. The original aggregation policy did this and downstream
    /// expectations (bucket counts, anchor dates) bake it in, so it is kept
    /// as-is rather than moving to calendar-accurate months.
    pub const fn bucket_width(self) -> usize {
        match self {
            Granularity::Month => 31,
            other => other.days() as usize,
        }
    }

    /// Parse a wire bucket size. The only fallible granularity path.
    pub fn from_days(days: i64) -> Result<Granularity> {
        match days {
            1 => Ok(Granularity::Day),
            7 => Ok(Granularity::Week),
            30 => Ok(Granularity::Month),
            90 => Ok(Granularity::Quarter),
            365 => Ok(Granularity::Year),
            other => Err(AxisError::InvalidGranularity(other)),
        }
    }

    /// Human-readable picker label.
    pub const fn label(self) -> &'static str {
        match self {
            Granularity::Day => "Daily",
            Granularity::Week => "Weekly",
            Granularity::Month => "Monthly",
            Granularity::Quarter => "Quarterly",
            Granularity::Year => "Yearly",
        }
    }

    /// Levels that make sense for a series of `days` days: those yielding
    /// at least three buckets.
    pub fn options_for(days: i64) -> Vec<Granularity> {
        Granularity::ALL
            .into_iter()
            .filter(|g| days / g.days() >= 3)
            .collect()
    }
}
