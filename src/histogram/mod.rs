//! Histogram rendering core plus parsing of frequency lines.
//!
//! The extractor hands over raw text in `uniq -c` shape: one line per
//! distinct label, `<count><ws><label...>`. Parsing is tolerant (a
//! malformed count becomes 0 rather than aborting the report); rendering
//! is a pure function with a clamped scale ceiling and a 1-character
//! width floor so tiny counts stay visible.

/// A (label, count) pair, the unit fed into rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRecord {
    pub label: String,
    pub count: u64,
}

impl FrequencyRecord {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One printable row: label, count, and the bar string (`width` asterisks
/// followed by the literal count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramRow {
    pub label: String,
    pub count: u64,
    pub bar: String,
}

impl HistogramRow {
    /// Tab-joined printable form: `label<TAB>count<TAB>bar`.
    pub fn line(&self) -> String {
        format!("{}\t{}\t{}", self.label, self.count, self.bar)
    }
}

/// Scale ceilings below this floor are clamped up, keeping bar lengths
/// stable for small datasets.
pub const MIN_SCALE_CEILING: u64 = 100;

/// Render records into rows, preserving input order.
///
/// Width per record: `(count / effective_ceiling) * 100`, floored at 1 and
/// truncated to an integer. A count of 0 therefore still renders a single
/// asterisk; that quirk is intentional and load-bearing for callers.
pub fn render(records: &[FrequencyRecord], scale_ceiling: u64) -> Vec<HistogramRow> {
    let ceiling = scale_ceiling.max(MIN_SCALE_CEILING);
    records
        .iter()
        .map(|r| {
            let raw = (r.count as f64 / ceiling as f64) * 100.0;
            let width = raw.max(1.0) as usize;
            HistogramRow {
                label: r.label.clone(),
                count: r.count,
                bar: format!("{} {}", "*".repeat(width), r.count),
            }
        })
        .collect()
}

/// Parse raw extractor output into records.
///
/// Trailing empty lines are discarded. Per line, the first whitespace token
/// is the count (unparsable -> 0, the line is kept); the remaining tokens
/// re-joined with single spaces form the label. Lines with no label token
/// are skipped.
pub fn parse_lines(raw: &str) -> Vec<FrequencyRecord> {
    raw.lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let count_tok = tokens.next()?;
            let label_parts: Vec<&str> = tokens.collect();
            if label_parts.is_empty() {
                return None;
            }
            let count = count_tok.parse::<u64>().unwrap_or(0);
            Some(FrequencyRecord::new(label_parts.join(" "), count))
        })
        .collect()
}

/// Maximum count across records; this is the scale ceiling fed to `render`
/// (0 for an empty report, which `render` clamps anyway).
pub fn max_count(records: &[FrequencyRecord]) -> u64 {
    records.iter().map(|r| r.count).max().unwrap_or(0)
}

/// Normalize a raw author identifier into a display name: every
/// non-alphanumeric character becomes a space, words are title-cased and
/// re-joined with single spaces. Raw identifiers are messy (email local
/// parts, mixed punctuation), hence the scrub.
pub fn normalize_author(raw: &str) -> String {
    let scrubbed: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    scrubbed
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(label: &str, count: u64) -> FrequencyRecord {
        FrequencyRecord::new(label, count)
    }

    #[test]
    fn ceiling_clamped_to_floor() {
        // input ceiling 10 -> effective 100: counts map 1:1 onto widths
        let rows = render(&[rec("2023-01-01", 5), rec("2023-01-02", 50)], 10);
        assert_eq!(rows[0].bar, format!("{} 5", "*".repeat(5)));
        assert_eq!(rows[1].bar, format!("{} 50", "*".repeat(50)));
    }

    #[test]
    fn ceiling_above_floor_passes_through() {
        let rows = render(&[rec("a", 200)], 200);
        assert_eq!(rows[0].bar, format!("{} 200", "*".repeat(100)));
    }

    #[test]
    fn width_floor_applies_to_tiny_and_zero_counts() {
        let rows = render(&[rec("zero", 0), rec("tiny", 1)], 100_000);
        assert_eq!(rows[0].bar, "* 0");
        assert_eq!(rows[1].bar, "* 1");
    }

    #[test]
    fn fractional_width_truncates() {
        // 19/1000 * 100 = 1.9 -> width 1
        let rows = render(&[rec("a", 19)], 1000);
        assert_eq!(rows[0].bar, "* 19");
    }

    #[test]
    fn render_preserves_order_and_is_idempotent() {
        let records = vec![rec("b", 3), rec("a", 7), rec("c", 1)];
        let first = render(&records, 100);
        let second = render(&records, 100);
        assert_eq!(first, second);
        let labels: Vec<&str> = first.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(render(&[], 0).is_empty());
    }

    #[test]
    fn row_line_is_tab_joined() {
        let rows = render(&[rec("2023-01-01", 5)], 10);
        assert_eq!(rows[0].line(), format!("2023-01-01\t5\t{} 5", "*".repeat(5)));
    }

    #[test]
    fn parse_basic_lines() {
        let recs = parse_lines("  3 2023-01-01\n 12 2023-01-02\n");
        assert_eq!(recs, vec![rec("2023-01-01", 3), rec("2023-01-02", 12)]);
    }

    #[test]
    fn parse_multiword_label() {
        let recs = parse_lines("2 jane doe");
        assert_eq!(recs, vec![rec("jane doe", 2)]);
    }

    #[test]
    fn malformed_count_defaults_to_zero_without_dropping_rest() {
        let recs = parse_lines("x 2023-01-01\n4 2023-01-02");
        assert_eq!(recs, vec![rec("2023-01-01", 0), rec("2023-01-02", 4)]);
    }

    #[test]
    fn trailing_blank_lines_discarded() {
        let recs = parse_lines("1 a\n\n\n");
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn max_count_handles_empty() {
        assert_eq!(max_count(&[]), 0);
        assert_eq!(max_count(&[rec("a", 2), rec("b", 9), rec("c", 4)]), 9);
    }

    #[test]
    fn author_normalization() {
        assert_eq!(normalize_author("jane.doe"), "Jane Doe");
        assert_eq!(normalize_author("j_smith-42"), "J Smith 42");
        assert_eq!(normalize_author("  ALL.CAPS  "), "All Caps");
        assert_eq!(normalize_author("..."), "");
    }

    #[test]
    fn authors_raw_line_end_to_end() {
        let recs = parse_lines("3 jane.doe");
        assert_eq!(recs.len(), 1);
        assert_eq!(normalize_author(&recs[0].label), "Jane Doe");
        assert_eq!(recs[0].count, 3);
    }
}
