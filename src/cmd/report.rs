/*!
`report.rs`

Implements the `commits` and `authors-commits` subcommands: repository
activity rendered as ASCII histograms.

Pipeline: git-log extraction (src/git) -> frequency-line parsing ->
histogram rendering (src/histogram) -> cyan tab-joined rows.

Behavior:
  - commits        : prints the maximum observed count first, then one row
                     per distinct commit date in log order.
  - authors-commits: one row per distinct normalized author, labels
                     left-justified to a fixed width.
  - `--json` emits rows as objects and skips the styling helpers.
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::git;
use crate::histogram::{self, HistogramRow};
use crate::log_debug;
use crate::utils::monotonic_ms;

/// Fixed label column for the authors report.
const AUTHOR_LABEL_WIDTH: usize = 30;

/// CLI arguments shared by the histogram reports.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// Entry point for the commits subcommand.
pub fn execute_commits(args: ReportArgs) -> Result<()> {
    let started = monotonic_ms();
    let raw = git::commit_date_lines()?;
    let (max, rows) = commit_rows(&raw);
    log_debug!("commits report: {} rows in {} ms", rows.len(), monotonic_ms() - started);

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "report": "commits",
                "max": max,
                "rows": json_rows(&rows),
            })
        );
        return Ok(());
    }

    println!("{max}");
    print_rows(&rows);
    Ok(())
}

/// Entry point for the authors-commits subcommand.
pub fn execute_authors_commits(args: ReportArgs) -> Result<()> {
    let started = monotonic_ms();
    let raw = git::author_lines()?;
    let rows = author_rows(&raw);
    log_debug!("authors report: {} rows in {} ms", rows.len(), monotonic_ms() - started);

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "report": "authors_commits",
                "rows": json_rows(&rows),
            })
        );
        return Ok(());
    }

    print_rows(&rows);
    Ok(())
}

/// Parse commit-date lines and render; the scale ceiling is the maximum
/// observed count (returned for display).
fn commit_rows(raw: &str) -> (u64, Vec<HistogramRow>) {
    let records = histogram::parse_lines(raw);
    let max = histogram::max_count(&records);
    (max, histogram::render(&records, max))
}

/// Parse author lines, normalize and left-justify the labels, render.
fn author_rows(raw: &str) -> Vec<HistogramRow> {
    let mut records = histogram::parse_lines(raw);
    for r in &mut records {
        r.label = format!(
            "{:<width$}",
            histogram::normalize_author(&r.label),
            width = AUTHOR_LABEL_WIDTH
        );
    }
    let max = histogram::max_count(&records);
    histogram::render(&records, max)
}

fn print_rows(rows: &[HistogramRow]) {
    let style = StyleOptions::detect();
    for row in rows {
        println!("{}", color(Role::Histogram, row.line(), &style));
    }
}

fn json_rows(rows: &[HistogramRow]) -> Vec<serde_json::Value> {
    rows.iter()
        .map(|r| {
            serde_json::json!({
                "label": r.label.trim_end(),
                "count": r.count,
                "bar": r.bar,
            })
        })
        .collect()
}
