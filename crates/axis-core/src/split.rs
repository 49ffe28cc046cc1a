// File: crates/axis-core/src/split.rs
// Summary: Decomposes a flat tick label into its two stacked display lines.

use crate::granularity::Granularity;
use crate::types::TickLabel;

/// Split a built label into `{head, tail}` display lines.
///
/// Weekly labels keep their first two tokens (`KW` and the week number) on
/// the head line so the year, if present, wraps alone; every other
/// granularity breaks after the first token. Re-joining head and tail with
/// a single space (tail omitted when empty) reproduces the input exactly.
pub fn split_label(label: &str, granularity: Granularity) -> TickLabel {
    let tokens: Vec<&str> = label.split_whitespace().collect();
    let head_len = match granularity {
        Granularity::Week => 2.min(tokens.len()),
        _ => 1.min(tokens.len()),
    };
    TickLabel {
        head: tokens[..head_len].join(" "),
        tail: tokens[head_len..].join(" "),
    }
}
