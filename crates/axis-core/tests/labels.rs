// File: crates/axis-core/tests/labels.rs
// Purpose: Hierarchical label compression, standalone formats, and the
//          split round-trip.

use axis_core::{build_labels, date_label, plain_label, split_label, Granularity};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn labels_in_order(ticks: &[NaiveDate], g: Granularity) -> Vec<String> {
    let map = build_labels(ticks, g);
    ticks.iter().map(|t| map[t].clone()).collect()
}

#[test]
fn daily_suppresses_month_after_first_day() {
    let ticks = [d(2020, 1, 1), d(2020, 1, 2), d(2020, 2, 1)];
    assert_eq!(labels_in_order(&ticks, Granularity::Day), ["01", "02", "01 Feb"]);
}

#[test]
fn daily_year_appears_once_per_year() {
    let ticks = [d(2020, 12, 30), d(2020, 12, 31), d(2021, 1, 1), d(2021, 1, 4)];
    assert_eq!(
        labels_in_order(&ticks, Granularity::Day),
        ["30 Dec 2020", "31", "01 Jan 2021", "04"]
    );
}

#[test]
fn single_year_month_run_omits_year_everywhere() {
    let ticks = [d(2020, 1, 1), d(2020, 4, 1), d(2020, 7, 1), d(2020, 10, 1)];
    let labels = labels_in_order(&ticks, Granularity::Month);
    assert_eq!(labels, ["Jan", "Apr", "Jul", "Oct"]);
    assert!(labels.iter().all(|l| !l.contains("2020")));
}

#[test]
fn two_year_month_run_marks_each_first_tick() {
    let ticks = [d(2020, 11, 1), d(2020, 12, 1), d(2021, 1, 1), d(2021, 2, 1)];
    assert_eq!(
        labels_in_order(&ticks, Granularity::Month),
        ["Nov 2020", "Dec", "Jan 2021", "Feb"]
    );
}

#[test]
fn weekly_labels_carry_iso_week() {
    let single = [d(2020, 6, 1), d(2020, 6, 8), d(2020, 6, 15)];
    assert_eq!(labels_in_order(&single, Granularity::Week), ["KW 23", "KW 24", "KW 25"]);

    let spanning = [d(2020, 6, 1), d(2021, 6, 7)];
    assert_eq!(
        labels_in_order(&spanning, Granularity::Week),
        ["KW 23 2020", "KW 23 2021"]
    );
}

#[test]
fn quarterly_labels() {
    let single = [d(2020, 1, 1), d(2020, 4, 1), d(2020, 10, 1)];
    assert_eq!(labels_in_order(&single, Granularity::Quarter), ["Q1", "Q2", "Q4"]);

    let spanning = [d(2020, 10, 1), d(2021, 1, 1)];
    assert_eq!(
        labels_in_order(&spanning, Granularity::Quarter),
        ["Q4 2020", "Q1 2021"]
    );
}

#[test]
fn yearly_labels_never_suppress() {
    let ticks = [d(2020, 1, 1)];
    assert_eq!(labels_in_order(&ticks, Granularity::Year), ["2020"]);
    let ticks = [d(2020, 1, 1), d(2021, 1, 1), d(2022, 1, 1)];
    assert_eq!(labels_in_order(&ticks, Granularity::Year), ["2020", "2021", "2022"]);
}

#[test]
fn single_tick_applies_all_first_flags() {
    assert_eq!(labels_in_order(&[d(2020, 3, 15)], Granularity::Day), ["15 Mar"]);
    assert_eq!(labels_in_order(&[d(2020, 3, 15)], Granularity::Month), ["Mar"]);
    assert_eq!(labels_in_order(&[d(2020, 6, 1)], Granularity::Week), ["KW 23"]);
}

#[test]
fn empty_ticks_yield_empty_map() {
    assert!(build_labels(&[], Granularity::Day).is_empty());
}

#[test]
fn split_rejoin_round_trips_every_label() {
    let ticks = [
        d(2020, 11, 2), d(2020, 11, 30), d(2020, 12, 28),
        d(2021, 1, 25), d(2021, 2, 22), d(2021, 3, 22),
    ];
    for g in Granularity::ALL {
        for label in build_labels(&ticks, g).values() {
            let parts = split_label(label, g);
            assert!(!parts.head.is_empty(), "{g:?}: empty head for {label:?}");
            assert_eq!(&parts.to_string(), label, "{g:?} round-trip");
        }
    }
}

#[test]
fn weekly_split_keeps_two_tokens_on_head() {
    let parts = split_label("KW 23 2020", Granularity::Week);
    assert_eq!((parts.head.as_str(), parts.tail.as_str()), ("KW 23", "2020"));

    let parts = split_label("KW 23", Granularity::Week);
    assert_eq!((parts.head.as_str(), parts.tail.as_str()), ("KW 23", ""));
}

#[test]
fn default_split_breaks_after_first_token() {
    let parts = split_label("01 Jan 2021", Granularity::Day);
    assert_eq!((parts.head.as_str(), parts.tail.as_str()), ("01", "Jan 2021"));

    let parts = split_label("Feb", Granularity::Month);
    assert_eq!((parts.head.as_str(), parts.tail.as_str()), ("Feb", ""));
}

#[test]
fn plain_labels_follow_tick_span() {
    // ceil(100 / 10) = 10 days per tick => full date
    assert_eq!(plain_label(d(2020, 6, 1), Granularity::Day, 100), "01 Jun 2020");
    // ceil(365 / 10) = 37 days per tick => month and year only
    assert_eq!(plain_label(d(2020, 6, 1), Granularity::Month, 365), "Jun 2020");
    // weekly always carries its year
    assert_eq!(plain_label(d(2020, 6, 1), Granularity::Week, 365), "KW 23 2020");
}

#[test]
fn date_label_is_full_date() {
    assert_eq!(date_label(d(2017, 11, 1)), "01 Nov 2017");
}
