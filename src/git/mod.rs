//! Frequency extraction from the version-control log.
//!
//! The original tooling ran shell pipelines (`git log | grep | cut |
//! uniq -c`); here `git log` is invoked with a structured argv and the
//! grep/cut/uniq steps happen in-process. The reducers still emit raw
//! `uniq -c`-shaped text (`<count> <label>` per line) so the downstream
//! parsing contract stays a plain text seam.

use crate::proc::CommandSpec;
use anyhow::Result;

/// Commit-date frequencies for the repository in the CWD, one line per
/// consecutive run of dates, in log emission order (newest first).
pub fn commit_date_lines() -> Result<String> {
    let log = git_log(&["--date=short"])?;
    Ok(reduce_dates(&log))
}

/// Author frequencies for the repository in the CWD, one line per distinct
/// email local part, sorted by label.
pub fn author_lines() -> Result<String> {
    let log = git_log(&[])?;
    Ok(reduce_authors(&log))
}

fn git_log(extra: &[&str]) -> Result<String> {
    let mut args = vec!["log".to_string()];
    args.extend(extra.iter().map(|s| s.to_string()));
    CommandSpec::new("git", args).run_capture()
}

/// `grep Date: | cut -f<date> | uniq -c` equivalent: pick the date token
/// off every `Date:` header and count consecutive runs in order.
pub fn reduce_dates(log: &str) -> String {
    let dates = log.lines().filter_map(|line| {
        let rest = line.strip_prefix("Date:")?;
        rest.split_whitespace().next()
    });

    let mut out = String::new();
    let mut current: Option<(&str, u64)> = None;
    for date in dates {
        match current {
            Some((label, n)) if label == date => current = Some((label, n + 1)),
            run => {
                flush(&mut out, run);
                current = Some((date, 1));
            }
        }
    }
    flush(&mut out, current);
    out
}

/// `grep Author: | cut -d"<" -f2 | cut -d"@" -f1 | sort | uniq -c`
/// equivalent: the email local part per `Author:` header, counted distinct
/// and emitted in sorted label order.
pub fn reduce_authors(log: &str) -> String {
    use std::collections::BTreeMap;

    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for line in log.lines() {
        let Some(rest) = line.strip_prefix("Author:") else {
            continue;
        };
        // "Name <local@host>" -> "local"; headers without brackets fall
        // back to the whole remainder.
        let ident = match rest.split_once('<') {
            Some((_, after)) => after,
            None => rest,
        };
        let ident = ident.split('@').next().unwrap_or(ident).trim();
        if ident.is_empty() {
            continue;
        }
        *counts.entry(ident).or_insert(0) += 1;
    }

    let mut out = String::new();
    for (label, n) in counts {
        flush(&mut out, Some((label, n)));
    }
    out
}

fn flush(out: &mut String, entry: Option<(&str, u64)>) {
    if let Some((label, n)) = entry {
        // uniq -c shape: right-aligned count, single space, label
        out.push_str(&format!("{:>7} {}\n", n, label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
commit aaa
Author: Jane Doe <jane.doe@example.com>
Date:   2023-01-02

    second

commit bbb
Author: bob <bob@example.com>
Date:   2023-01-02

    also second day

commit ccc
Author: Jane Doe <jane.doe@example.com>
Date:   2023-01-01

    first
";

    #[test]
    fn dates_counted_in_consecutive_runs() {
        let out = reduce_dates(LOG);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["2", "2023-01-02"]);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["1", "2023-01-01"]);
    }

    #[test]
    fn dates_nonconsecutive_runs_stay_separate() {
        let log = "Date: a\nDate: b\nDate: a\n";
        let out = reduce_dates(log);
        assert_eq!(out.lines().count(), 3, "uniq -c counts runs, not totals");
    }

    #[test]
    fn authors_counted_distinct_and_sorted() {
        let out = reduce_authors(LOG);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["1", "bob"]);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["2", "jane.doe"]);
    }

    #[test]
    fn author_without_brackets_uses_remainder() {
        let out = reduce_authors("Author: plainname\n");
        assert_eq!(out.trim().split_whitespace().collect::<Vec<_>>(), vec!["1", "plainname"]);
    }

    #[test]
    fn empty_log_reduces_to_empty() {
        assert!(reduce_dates("").is_empty());
        assert!(reduce_authors("").is_empty());
    }
}
