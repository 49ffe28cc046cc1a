// File: crates/demo/src/main.rs
// Summary: Demo walks a ladder of series durations (or a CSV file) through the
//          full pipeline and prints each chart's two-line tick rows.

use anyhow::{Context, Result};
use axis_core::{
    aggregate_buckets, build_labels, generate_series, plain_label, select_ticks, split_label,
    Granularity, Sample, TickLabel, DEFAULT_DIVISIONS,
};
use chrono::NaiveDate;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Durations (in days) the original application shell instantiated.
const DURATION_LADDER: [usize; 11] = [7, 14, 21, 31, 63, 100, 281, 365, 400, 750, 1100];

fn main() -> Result<()> {
    init_logger();

    // Accept a duration or a CSV path from CLI; fall back to the full ladder.
    match std::env::args().nth(1) {
        None => {
            for duration in DURATION_LADDER {
                let samples = generate_series(duration)?;
                print_graph(&samples)?;
            }
        }
        Some(arg) => match arg.parse::<usize>() {
            Ok(duration) => {
                let samples = generate_series(duration)?;
                print_graph(&samples)?;
            }
            Err(_) => {
                let path = Path::new(&arg);
                let samples = load_series_csv(path)
                    .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
                if samples.is_empty() {
                    anyhow::bail!("no samples loaded - check headers/delimiter.");
                }
                println!("Loaded {} samples from {}", samples.len(), path.display());
                print_graph(&samples)?;
            }
        },
    }

    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("axis_core=debug,info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Run the pipeline over `samples` at every granularity that fits, printing
/// the header line and the two stacked label lines per tick.
fn print_graph(samples: &[Sample]) -> Result<()> {
    let duration = samples.len();
    let options = Granularity::options_for(duration as i64);
    if options.is_empty() {
        println!("{duration} days graph: too short for any granularity\n");
        return Ok(());
    }

    for granularity in options {
        let points = aggregate_buckets(samples, granularity);
        let step_size = points.len().div_ceil(DEFAULT_DIVISIONS);
        let ticks = select_ticks(&points, DEFAULT_DIVISIONS)?;
        let labels = build_labels(&ticks, granularity);

        println!(
            "{duration} days graph ({}), ticks: {}, stepSize: {step_size}",
            granularity.label(),
            ticks.len()
        );

        let parts: Vec<TickLabel> = ticks
            .iter()
            .map(|tick| split_label(&labels[tick], granularity))
            .collect();
        let width = parts
            .iter()
            .map(|p| p.head.len().max(p.tail.len()))
            .max()
            .unwrap_or(0)
            + 2;
        println!("  {}", row(parts.iter().map(|p| p.head.as_str()), width));
        println!("  {}", row(parts.iter().map(|p| p.tail.as_str()), width));

        let plain: Vec<String> = ticks
            .iter()
            .map(|&tick| plain_label(tick, granularity, duration as i64))
            .collect();
        println!("  [{}]\n", plain.join(", "));
    }
    Ok(())
}

fn row<'a>(cells: impl Iterator<Item = &'a str>, width: usize) -> String {
    cells.map(|c| format!("{c:<width$}")).collect::<String>().trim_end().to_string()
}

/// Load a `date,value` CSV into a sample vec, sniffing header names.
fn load_series_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|want| h == want))
    };
    let i_date = idx(&["date", "day", "time", "timestamp"]).context("no date column")?;
    let i_value = idx(&["value", "val", "count"]).context("no value column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec
            .get(i_date)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<i64>().ok());
        if let (Some(date), Some(value)) = (date, value) {
            out.push(Sample { date, value });
        }
    }
    Ok(out)
}
