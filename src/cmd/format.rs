/*!
format.rs

Human-output formatting primitives: ANSI color roles, a boxed header, and
a plain-text table. Zero terminal crates; degrades to plain text when
NO_COLOR is set. JSON output paths must not use these helpers so machine
output stays clean.

Public API:
  - StyleOptions::detect() -> StyleOptions
  - color(role, text, &StyleOptions) -> String
  - box_header(title, subtitle_opt, &StyleOptions) -> String
  - table(headers, rows, TableOpts, &StyleOptions) -> String
*/

/* -------------------------------------------------------------------------- */
/* Style Options                                                              */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub term_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let use_color = std::env::var_os("NO_COLOR").is_none();
        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);
        StyleOptions {
            use_color,
            term_width,
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        StyleOptions {
            use_color: false,
            term_width: 100,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Color Roles                                                                */
/* -------------------------------------------------------------------------- */

/// Output roles, themed after the tool's traditional palette: green for
/// status lines, red for errors, yellow for greetings, cyan for histogram
/// rows.
#[derive(Debug, Clone, Copy)]
pub enum Role {
    Status,
    Error,
    Greeting,
    Histogram,
    Dim,
    Bold,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Status => "32",    // green
        Role::Error => "31",     // red
        Role::Greeting => "33",  // yellow
        Role::Histogram => "36", // cyan
        Role::Dim => "2",
        Role::Bold => "1",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip CSI sequence through its final byte
            if chars.peek() == Some(&'[') {
                for esc in chars.by_ref() {
                    if esc.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/* -------------------------------------------------------------------------- */
/* Box Header                                                                 */
/* -------------------------------------------------------------------------- */

pub fn box_header(
    title: impl AsRef<str>,
    subtitle: Option<impl AsRef<str>>,
    style: &StyleOptions,
) -> String {
    let title_styled = color(Role::Bold, title.as_ref(), style);
    let inner = match subtitle {
        Some(s) => format!("{title_styled}  {}", color(Role::Dim, s.as_ref(), style)),
        None => title_styled,
    };

    let inner_len = visible_len(&inner);
    let width = inner_len + 2;

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(width)));
    out.push_str(&format!("│ {} │\n", inner));
    out.push_str(&format!("└{}┘", "─".repeat(width)));
    out
}

/* -------------------------------------------------------------------------- */
/* Table                                                                      */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Default)]
pub struct TableOpts {
    /// Column indexes rendered right-aligned (e.g. the address column).
    pub right_align: Vec<usize>,
}

/// Render a plain-text table: bold headers, a dash separator, two-space
/// gutters. Column widths come from the widest cell (ANSI-stripped).
pub fn table(headers: &[&str], rows: &[Vec<String>], opts: TableOpts, style: &StyleOptions) -> String {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(cols).enumerate() {
            widths[i] = widths[i].max(visible_len(cell));
        }
    }

    let pad = |cell: &str, i: usize| -> String {
        let fill = widths[i].saturating_sub(visible_len(cell));
        if opts.right_align.contains(&i) {
            format!("{}{}", " ".repeat(fill), cell)
        } else {
            format!("{}{}", cell, " ".repeat(fill))
        }
    };

    let mut out = String::new();
    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, i))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&color(Role::Bold, header_line, style));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * cols.saturating_sub(1)));

    for row in rows {
        out.push('\n');
        let line = (0..cols)
            .map(|i| pad(row.get(i).map(String::as_str).unwrap_or(""), i))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
    }
    out
}

/* --------------------------------- Tests ---------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_disabled_passes_through() {
        let plain = StyleOptions::plain();
        assert_eq!(color(Role::Error, "boom", &plain), "boom");
    }

    #[test]
    fn color_enabled_wraps_with_reset() {
        let style = StyleOptions {
            use_color: true,
            term_width: 100,
        };
        let s = color(Role::Histogram, "row", &style);
        assert!(s.starts_with("\x1b[36m"));
        assert!(s.ends_with("\x1b[0m"));
    }

    #[test]
    fn strip_ansi_removes_codes() {
        assert_eq!(strip_ansi("\x1b[32mok\x1b[0m"), "ok");
        assert_eq!(strip_ansi("no codes"), "no codes");
    }

    #[test]
    fn table_aligns_columns() {
        let plain = StyleOptions::plain();
        let rows = vec![
            vec!["web".to_string(), "10.0.0.1".to_string()],
            vec!["db-primary".to_string(), "10.0.0.2".to_string()],
        ];
        let t = table(
            &["NAME", "ADDRESS"],
            &rows,
            TableOpts {
                right_align: vec![1],
            },
            &plain,
        );
        let lines: Vec<&str> = t.lines().collect();
        // widest name is "db-primary" (10): name column pads to 10, address
        // column right-aligns to "10.0.0.1" (8)
        assert_eq!(lines[0], format!("{:<10}  {:>8}", "NAME", "ADDRESS"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("web"));
        assert!(lines[2].ends_with("10.0.0.1"), "address right-aligned: {:?}", lines[2]);
    }

    #[test]
    fn box_header_wraps_title() {
        let plain = StyleOptions::plain();
        let h = box_header("Server List", None::<&str>, &plain);
        let lines: Vec<&str> = h.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Server List"));
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
    }
}
