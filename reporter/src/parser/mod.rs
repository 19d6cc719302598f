//! CSV source reading.
//!
//! Reads a comma-separated, UTF-8 source into its header list and a sequence
//! of [`RawRow`]s. No employee-specific logic here; see
//! [`crate::validation`] for that.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// One data row keyed by column name.
pub type RawRow = HashMap<String, String>;

/// A source split into header and data rows.
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    /// Column headers, trimmed.
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<RawRow>,
}

/// Build a CSV reader with the settings used for every source.
///
/// Rows may be shorter or longer than the header; absent cells are simply
/// missing from the [`RawRow`].
pub fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input)
}

/// Read the header line of a CSV reader.
pub fn read_headers<R: Read>(reader: &mut csv::Reader<R>, path: &Path) -> LoadResult<Vec<String>> {
    let headers = reader.headers().map_err(|source| csv_error(path, source))?;
    Ok(headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect())
}

/// Iterate the data rows of a CSV reader as [`RawRow`]s.
pub fn rows<'r, R: Read + 'r>(
    reader: &'r mut csv::Reader<R>,
    headers: &'r [String],
    path: &'r Path,
) -> impl Iterator<Item = LoadResult<RawRow>> + 'r {
    reader.records().map(move |record| {
        let record = record.map_err(|source| csv_error(path, source))?;
        Ok(headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect())
    })
}

/// Parse CSV text held in memory.
///
/// # Example
/// ```
/// use staff_reporter::parser::parse_str;
///
/// let parsed = parse_str("name,team\nAlice,\"API, Core\"\n").unwrap();
/// assert_eq!(parsed.headers, vec!["name", "team"]);
/// assert_eq!(parsed.rows[0]["team"], "API, Core");
/// ```
pub fn parse_str(content: &str) -> LoadResult<ParsedSource> {
    parse_reader(content.as_bytes(), Path::new("<memory>"))
}

/// Parse a whole CSV file.
pub fn parse_file(path: &Path) -> LoadResult<ParsedSource> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(file, path)
}

fn parse_reader<R: Read>(input: R, path: &Path) -> LoadResult<ParsedSource> {
    let mut reader = reader(input);
    let headers = read_headers(&mut reader, path)?;
    let rows = rows(&mut reader, &headers, path).collect::<LoadResult<Vec<_>>>()?;
    Ok(ParsedSource { headers, rows })
}

fn csv_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
