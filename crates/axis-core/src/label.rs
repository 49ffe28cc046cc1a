// File: crates/axis-core/src/label.rs
// Summary: Hierarchical axis-label builder with redundancy suppression,
//          plus the standalone per-tick formatters.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::granularity::Granularity;

/// Per-tick formatting context produced while walking the grouped ticks.
///
/// Built fresh for every tick; nothing is mutated across iterations.
/// `first_of_year` marks the first group encountered within a calendar year,
/// `first_of_month` the first date within a month (daily granularity only;
/// equal to `first_of_year` level at coarser granularities).
#[derive(Clone, Copy, Debug)]
struct LabelContext {
    single_year: bool,
    first_of_year: bool,
    first_of_month: bool,
}

/// Build one compressed label per tick, keyed by tick date.
///
/// Ticks are grouped into chronological year runs (and month runs within a
/// year for `Day`). Information that would repeat identically across
/// adjacent ticks inside the same parent period is printed only at the
/// first occurrence: the month on the first day of its month, the year on
/// the first tick of its year, and no year at all when every tick falls in
/// a single calendar year. `Year` granularity prints the 4-digit year
/// unconditionally.
///
/// Duplicate tick dates are not expected; if present, the last one wins.
pub fn build_labels(ticks: &[NaiveDate], granularity: Granularity) -> BTreeMap<NaiveDate, String> {
    let single_year = ticks
        .first()
        .map(|first| ticks.iter().all(|t| t.year() == first.year()))
        .unwrap_or(true);

    let mut labels = BTreeMap::new();
    for year_run in ticks.chunk_by(|a, b| a.year() == b.year()) {
        match granularity {
            Granularity::Day => {
                let month_runs = year_run.chunk_by(|a, b| a.month() == b.month());
                for (month_idx, month_run) in month_runs.enumerate() {
                    for (day_idx, &date) in month_run.iter().enumerate() {
                        let ctx = LabelContext {
                            single_year,
                            first_of_year: month_idx == 0,
                            first_of_month: day_idx == 0,
                        };
                        labels.insert(date, format_day(date, ctx));
                    }
                }
            }
            Granularity::Week | Granularity::Month | Granularity::Quarter => {
                for (idx, &date) in year_run.iter().enumerate() {
                    let ctx = LabelContext {
                        single_year,
                        first_of_year: idx == 0,
                        first_of_month: idx == 0,
                    };
                    let label = match granularity {
                        Granularity::Week => format_week(date, ctx),
                        Granularity::Month => format_month(date, ctx),
                        _ => format_quarter(date, ctx),
                    };
                    labels.insert(date, label);
                }
            }
            Granularity::Year => {
                for &date in year_run {
                    labels.insert(date, date.year().to_string());
                }
            }
        }
    }
    debug!(ticks = ticks.len(), labels = labels.len(), ?granularity, "built tick labels");
    labels
}

/// `dd`, plus `MMM` on the first day of a month run, plus `yyyy` on the
/// first tick of a year run when more than one year is present.
fn format_day(date: NaiveDate, ctx: LabelContext) -> String {
    let mut label = format!("{:02}", date.day());
    if ctx.first_of_month {
        label.push_str(&format!(" {}", date.format("%b")));
        if ctx.first_of_year && !ctx.single_year {
            label.push_str(&format!(" {}", date.year()));
        }
    }
    label
}

/// `KW <iso-week>`, plus `yyyy` on the first tick of a year run.
fn format_week(date: NaiveDate, ctx: LabelContext) -> String {
    let week = format!("KW {}", date.iso_week().week());
    if ctx.first_of_year && !ctx.single_year {
        format!("{} {}", week, date.year())
    } else {
        week
    }
}

/// `MMM`, plus `yyyy` on the first tick of a year run.
fn format_month(date: NaiveDate, ctx: LabelContext) -> String {
    if ctx.first_of_year && !ctx.single_year {
        format!("{} {}", date.format("%b"), date.year())
    } else {
        date.format("%b").to_string()
    }
}

/// `Q<1-4>`, plus `yyyy` on the first tick of a year run.
fn format_quarter(date: NaiveDate, ctx: LabelContext) -> String {
    let quarter = (date.month0() / 3) + 1;
    if ctx.first_of_year && !ctx.single_year {
        format!("Q{} {}", quarter, date.year())
    } else {
        format!("Q{}", quarter)
    }
}

/// Standalone (uncompressed) tick label, independent of neighboring ticks.
///
/// Weekly ticks always carry their year. Other granularities show the full
/// date while one tick spans at most three weeks of the series
/// (`ceil(duration / 10) <= 21` days per tick), the month and year otherwise.
pub fn plain_label(date: NaiveDate, granularity: Granularity, duration_days: i64) -> String {
    if granularity == Granularity::Week {
        return format!("KW {} {}", date.iso_week().week(), date.year());
    }
    let day_per_tick = (duration_days as f64 / 10.0).ceil() as i64;
    if day_per_tick <= 21 {
        date_label(date)
    } else {
        date.format("%b %Y").to_string()
    }
}

/// Full-date form, `dd MMM yyyy` (the tooltip format).
pub fn date_label(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
