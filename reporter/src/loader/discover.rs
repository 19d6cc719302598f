//! CSV file discovery.
//!
//! Walks a directory (recursively or not) and returns every regular file
//! whose name ends in `.csv`, ignoring case, sorted lexicographically.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{LoadError, LoadResult};

/// Canonical extension of CSV sources.
pub const CSV_EXTENSION: &str = "csv";

/// `true` if the path ends in `.csv`, ignoring case.
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(CSV_EXTENSION))
}

/// Find CSV files under `folder`.
///
/// An empty result is not an error here; see
/// [`crate::loader::CsvLoader::discover`] for that.
pub fn discover_csv_files(folder: &Path, recursive: bool) -> LoadResult<Vec<PathBuf>> {
    if folder.as_os_str().is_empty() || folder.to_string_lossy().trim().is_empty() {
        return Err(LoadError::SourceInvalid {
            path: folder.to_path_buf(),
            reason: "folder path is empty".into(),
        });
    }
    if !folder.exists() {
        return Err(LoadError::SourceNotFound {
            path: folder.to_path_buf(),
        });
    }
    if !folder.is_dir() {
        return Err(LoadError::SourceInvalid {
            path: folder.to_path_buf(),
            reason: "not a directory".into(),
        });
    }

    let mut walker = WalkDir::new(folder).follow_links(true);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(folder).to_path_buf();
            LoadError::Io {
                path,
                source: e.into(),
            }
        })?;
        if entry.file_type().is_file() && has_csv_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    // Whole-path string order: `a-b.csv` precedes `a/z.csv`.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!(folder = %folder.display(), count = files.len(), recursive, "discovered csv files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "name\n").unwrap();
    }

    #[test]
    fn test_recursive_discovery() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("root.csv"));
        touch(&dir.path().join("sub/nested.csv"));
        touch(&dir.path().join("readme.txt"));

        let files = discover_csv_files(dir.path(), true).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("root.csv"), dir.path().join("sub/nested.csv")]
        );
    }

    #[test]
    fn test_flat_discovery() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("root.csv"));
        touch(&dir.path().join("sub/nested.csv"));
        touch(&dir.path().join("readme.txt"));

        let files = discover_csv_files(dir.path(), false).unwrap();
        assert_eq!(files, vec![dir.path().join("root.csv")]);
    }

    #[test]
    fn test_extension_case_insensitive_and_sorted() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("c.CSV"));
        touch(&dir.path().join("a.csv"));
        touch(&dir.path().join("b.Csv"));
        touch(&dir.path().join("d.csv.bak"));

        let names: Vec<String> = discover_csv_files(dir.path(), true)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.Csv", "c.CSV"]);
    }

    #[test]
    fn test_sorted_by_full_path_string() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a/z.csv"));
        touch(&dir.path().join("a-b.csv"));
        touch(&dir.path().join("a.csv"));

        let files = discover_csv_files(dir.path(), true).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("a-b.csv"),
                dir.path().join("a.csv"),
                dir.path().join("a/z.csv"),
            ]
        );
    }

    #[test]
    fn test_directory_named_like_csv_is_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("archive.csv")).unwrap();
        assert!(discover_csv_files(dir.path(), true).unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder() {
        let dir = tempdir().unwrap();
        let err = discover_csv_files(&dir.path().join("absent"), true).unwrap_err();
        assert!(matches!(err, LoadError::SourceNotFound { .. }));
    }

    #[test]
    fn test_file_instead_of_folder() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("root.csv");
        touch(&file);
        let err = discover_csv_files(&file, true).unwrap_err();
        assert!(matches!(err, LoadError::SourceInvalid { .. }));
    }

    #[test]
    fn test_blank_folder_path() {
        let err = discover_csv_files(Path::new("  "), true).unwrap_err();
        assert!(matches!(err, LoadError::SourceInvalid { .. }));
    }
}
