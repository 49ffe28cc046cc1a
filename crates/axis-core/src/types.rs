// File: crates/axis-core/src/types.rs
// Summary: Shared pipeline types and constants (samples, aggregates, tick labels).

use chrono::NaiveDate;
use std::fmt;

/// Lower bound of generated and aggregated values, inclusive.
pub const VALUE_MIN: i64 = 20;
/// Upper bound of generated and aggregated values, inclusive.
pub const VALUE_MAX: i64 = 90;

/// One raw daily observation.
/// Contract: `value` lies in `[VALUE_MIN, VALUE_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: i64,
}

/// One bucket of raw samples collapsed to its rounded mean.
/// `date` is the anchor: the date of the bucket's first sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AggregatedPoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// Two stacked display lines for one axis tick.
/// `tail` is empty when the label had nothing to carry onto a second line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickLabel {
    pub head: String,
    pub tail: String,
}

impl fmt::Display for TickLabel {
    /// Re-joins the two lines into the flat label the splitter consumed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tail.is_empty() {
            write!(f, "{}", self.head)
        } else {
            write!(f, "{} {}", self.head, self.tail)
        }
    }
}
