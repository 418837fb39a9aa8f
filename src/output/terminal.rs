//! Terminal table formatting with baseline highlighting.

use colored::Colorize;

use crate::result::{RankedEntry, Results};

const RUNS_WIDTH: usize = 10;
const OPS_WIDTH: usize = 25;
const SLOWER_WIDTH: usize = 15;

/// Format the ranked summary as an aligned table.
///
/// One row per benchmarked function, fastest first; the baseline row is
/// rendered green. The label column grows to fit the longest label.
pub fn format_ranking(results: &Results) -> String {
    let ranking = results.ranking();

    let label_width = ranking
        .iter()
        .map(|entry| entry.label.len())
        .chain(std::iter::once("Label".len()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut output = String::new();
    output.push_str(&row(
        label_width,
        "Label",
        "Runs",
        "Ops/Sec",
        "Times slower",
    ));
    output.push('\n');
    output.push_str(&separator(label_width));

    for entry in &ranking {
        output.push('\n');
        let line = format_entry(entry, label_width);
        if entry.is_baseline {
            output.push_str(&line.green().to_string());
        } else {
            output.push_str(&line);
        }
    }

    output
}

fn format_entry(entry: &RankedEntry, label_width: usize) -> String {
    let ops = format!(
        "{} +/-{}%",
        sensible(entry.ops_per_second),
        sensible(entry.error_percent)
    );
    let slower = format!("{}x", sensible(entry.slowdown));
    row(
        label_width,
        &entry.label,
        &entry.runs.to_string(),
        &ops,
        &slower,
    )
}

fn row(label_width: usize, label: &str, runs: &str, ops: &str, slower: &str) -> String {
    format!(
        "{label:<label_width$}|{runs:<RUNS_WIDTH$}|{ops:<OPS_WIDTH$}|{slower:<SLOWER_WIDTH$}"
    )
}

fn separator(label_width: usize) -> String {
    format!(
        "{}+{}+{}+{}",
        "-".repeat(label_width),
        "-".repeat(RUNS_WIDTH),
        "-".repeat(OPS_WIDTH),
        "-".repeat(SLOWER_WIDTH)
    )
}

/// Render a number at a precision that suits its magnitude: thousands
/// separators and no decimals above 1000, three decimals otherwise.
fn sensible(value: f64) -> String {
    if value > 1000.0 {
        group_thousands(&format!("{value:.0}"))
    } else {
        format!("{value:.3}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
