//! Plain-text table rendering.
//!
//! Renders headers plus rows of [`Cell`]s in one of several [`TableFormat`]s.
//! Numbers are right-aligned, text left-aligned. Cells containing line
//! breaks span several physical lines, except in the Markdown styles where
//! the lines are joined with a space.
//!
//! # Example
//!
//! ```
//! use staff_reporter::report::table::{render_table, Cell, TableFormat};
//!
//! let rows = vec![vec![Cell::from("Alice"), Cell::from(4.8)]];
//! let table = render_table(&["Name", "Score"], &rows, TableFormat::Simple);
//! assert_eq!(table, "Name   Score\n-----  -----\nAlice    4.8");
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A table cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

// =============================================================================
// Table Formats
// =============================================================================

/// Border and alignment conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Full grid with `+`, `-`, `|` and `=` under the header.
    #[default]
    Grid,
    /// Dashes under the header, no borders.
    Simple,
    /// No lines at all.
    Plain,
    /// Markdown table with alignment colons.
    Pipe,
    /// Markdown table without alignment colons.
    Github,
    /// PostgreSQL console style.
    Psql,
}

impl TableFormat {
    /// All format names, for messages.
    pub const NAMES: [&'static str; 6] = ["grid", "simple", "plain", "pipe", "github", "psql"];
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(TableFormat::Grid),
            "simple" => Ok(TableFormat::Simple),
            "plain" => Ok(TableFormat::Plain),
            "pipe" => Ok(TableFormat::Pipe),
            "github" => Ok(TableFormat::Github),
            "psql" => Ok(TableFormat::Psql),
            other => Err(format!(
                "unknown table format '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Column layout computed from headers and rows.
struct Layout {
    widths: Vec<usize>,
    aligns: Vec<Align>,
}

impl Layout {
    fn new(headers: &[String], rows: &[Vec<Vec<String>>], source: &[Vec<Cell>]) -> Self {
        let widths = (0..headers.len())
            .map(|col| {
                let body = rows
                    .iter()
                    .flat_map(|row| row[col].iter())
                    .map(|line| line.chars().count());
                body.chain(std::iter::once(headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        // A column is numeric when every present value is numeric.
        let aligns = (0..headers.len())
            .map(|col| {
                let mut values = source.iter().filter_map(|row| row.get(col)).peekable();
                if values.peek().is_some() && values.all(Cell::is_numeric) {
                    Align::Right
                } else {
                    Align::Left
                }
            })
            .collect();

        Self { widths, aligns }
    }

    fn pad(&self, col: usize, text: &str) -> String {
        let width = self.widths[col];
        match self.aligns[col] {
            Align::Left => format!("{:<width$}", text, width = width),
            Align::Right => format!("{:>width$}", text, width = width),
        }
    }
}

/// Render a table.
///
/// Rows shorter than the header are padded with empty cells; extra cells
/// are ignored. Zero rows still renders the header.
pub fn render_table<H: AsRef<str>>(headers: &[H], rows: &[Vec<Cell>], format: TableFormat) -> String {
    let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
    let markdown = matches!(format, TableFormat::Pipe | TableFormat::Github);

    let cells: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|col| {
                    let text = row.get(col).map(|c| c.to_string()).unwrap_or_default();
                    if markdown {
                        vec![text.lines().collect::<Vec<_>>().join(" ")]
                    } else {
                        let lines: Vec<String> = text.lines().map(String::from).collect();
                        if lines.is_empty() {
                            vec![String::new()]
                        } else {
                            lines
                        }
                    }
                })
                .collect()
        })
        .collect();

    let layout = Layout::new(&headers, &cells, rows);
    let header_cells: Vec<Vec<String>> = headers.iter().map(|h| vec![h.clone()]).collect();

    let mut out: Vec<String> = Vec::new();
    match format {
        TableFormat::Grid => {
            out.push(rule(&layout, '+', '-'));
            out.extend(bordered(&layout, &header_cells));
            out.push(rule(&layout, '+', '='));
            for row in &cells {
                out.extend(bordered(&layout, row));
                out.push(rule(&layout, '+', '-'));
            }
        }
        TableFormat::Psql => {
            out.push(rule(&layout, '+', '-'));
            out.extend(bordered(&layout, &header_cells));
            out.push(psql_separator(&layout));
            for row in &cells {
                out.extend(bordered(&layout, row));
            }
            out.push(rule(&layout, '+', '-'));
        }
        TableFormat::Pipe | TableFormat::Github => {
            out.extend(bordered(&layout, &header_cells));
            out.push(markdown_separator(&layout, format == TableFormat::Pipe));
            for row in &cells {
                out.extend(bordered(&layout, row));
            }
        }
        TableFormat::Simple => {
            out.extend(spaced(&layout, &header_cells));
            out.push(
                layout
                    .widths
                    .iter()
                    .map(|w| "-".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("  "),
            );
            for row in &cells {
                out.extend(spaced(&layout, row));
            }
        }
        TableFormat::Plain => {
            out.extend(spaced(&layout, &header_cells));
            for row in &cells {
                out.extend(spaced(&layout, row));
            }
        }
    }

    out.iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn rule(layout: &Layout, corner: char, fill: char) -> String {
    let mut line = String::from(corner);
    for width in &layout.widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push(corner);
    }
    line
}

fn psql_separator(layout: &Layout) -> String {
    let inner: Vec<String> = layout.widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("|{}|", inner.join("+"))
}

fn markdown_separator(layout: &Layout, with_colons: bool) -> String {
    let inner: Vec<String> = layout
        .widths
        .iter()
        .zip(&layout.aligns)
        .map(|(w, align)| {
            if !with_colons {
                return "-".repeat(w + 2);
            }
            match align {
                Align::Left => format!(":{}", "-".repeat(w + 1)),
                Align::Right => format!("{}:", "-".repeat(w + 1)),
            }
        })
        .collect();
    format!("|{}|", inner.join("|"))
}

fn physical_lines(row: &[Vec<String>]) -> usize {
    row.iter().map(Vec::len).max().unwrap_or(1).max(1)
}

fn line_of<'a>(row: &'a [Vec<String>], col: usize, line: usize) -> &'a str {
    row[col].get(line).map(String::as_str).unwrap_or("")
}

fn bordered(layout: &Layout, row: &[Vec<String>]) -> Vec<String> {
    (0..physical_lines(row))
        .map(|line| {
            let inner: Vec<String> = (0..row.len())
                .map(|col| format!(" {} ", layout.pad(col, line_of(row, col, line))))
                .collect();
            format!("|{}|", inner.join("|"))
        })
        .collect()
}

fn spaced(layout: &Layout, row: &[Vec<String>]) -> Vec<String> {
    (0..physical_lines(row))
        .map(|line| {
            (0..row.len())
                .map(|col| layout.pad(col, line_of(row, col, line)))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<Cell>> {
        vec![
            vec![Cell::from(1usize), Cell::from("Alice"), Cell::from(4.8)],
            vec![Cell::from(2usize), Cell::from("Bob"), Cell::from(4.25)],
        ]
    }

    #[test]
    fn test_grid() {
        let table = render_table(&["#", "Name", "Score"], &sample(), TableFormat::Grid);
        let expected = "\
+---+-------+-------+
| # | Name  | Score |
+===+=======+=======+
| 1 | Alice |   4.8 |
+---+-------+-------+
| 2 | Bob   |  4.25 |
+---+-------+-------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_grid_without_rows_keeps_header() {
        let table = render_table(&["#", "Name"], &[], TableFormat::Grid);
        assert_eq!(table, "+---+------+\n| # | Name |\n+===+======+");
    }

    #[test]
    fn test_multiline_cells_in_grid() {
        let rows = vec![vec![Cell::from("Dev\n(Alice, Bob)"), Cell::from(2usize)]];
        let table = render_table(&["Position", "Count"], &rows, TableFormat::Grid);
        let expected = "\
+--------------+-------+
| Position     | Count |
+==============+=======+
| Dev          |     2 |
| (Alice, Bob) |       |
+--------------+-------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_psql() {
        let table = render_table(&["#", "Name", "Score"], &sample()[..1], TableFormat::Psql);
        let expected = "\
+---+-------+-------+
| # | Name  | Score |
|---+-------+-------|
| 1 | Alice |   4.8 |
+---+-------+-------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_pipe_and_github() {
        let rows = vec![vec![Cell::from("Dev\n(Alice)"), Cell::from(1usize)]];
        let pipe = render_table(&["Position", "n"], &rows, TableFormat::Pipe);
        assert_eq!(pipe, "| Position    | n |\n|:------------|--:|\n| Dev (Alice) | 1 |");

        let github = render_table(&["Position", "n"], &rows, TableFormat::Github);
        assert_eq!(github, "| Position    | n |\n|-------------|---|\n| Dev (Alice) | 1 |");
    }

    #[test]
    fn test_plain() {
        let table = render_table(&["#", "Name"], &sample(), TableFormat::Plain);
        assert_eq!(table, "#  Name\n1  Alice\n2  Bob");
    }

    #[test]
    fn test_short_rows_padded() {
        let rows = vec![vec![Cell::from("only")]];
        let table = render_table(&["a", "b"], &rows, TableFormat::Plain);
        assert_eq!(table, "a     b\nonly");
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!("GRID".parse::<TableFormat>().unwrap(), TableFormat::Grid);
        assert_eq!(" github ".parse::<TableFormat>().unwrap(), TableFormat::Github);
        assert!("fancy".parse::<TableFormat>().unwrap_err().contains("psql"));
    }
}
