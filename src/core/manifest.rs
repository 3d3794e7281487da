// LogFileChecker - core/manifest.rs
//
// Archive spreadsheet loading. Reads one worksheet with calamine, locates the
// filename column in the header row, and collects its values into a set of
// known log-file stems.
//
// Cell normalisation:
//   - strings are used verbatim (no trimming, no case folding)
//   - integers and integral floats render without a decimal part, so a stem
//     such as "10452" matches a numeric cell
//   - empty, boolean, error, and date cells are ignored

use crate::util::error::ManifestError;
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashSet;
use std::path::Path;

/// The set of log-file stems an archive already lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    stems: HashSet<String>,
}

impl Manifest {
    /// Load the `column` values of worksheet `sheet_name` in the workbook at `path`.
    ///
    /// The first row of the sheet's used range is the header row; the first
    /// header cell whose text equals `column` exactly selects the column.
    pub fn load(path: &Path, sheet_name: &str, column: &str) -> Result<Self, ManifestError> {
        let mut workbook = open_workbook_auto(path).map_err(|source| ManifestError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let sheet_names = workbook.sheet_names();
        if !sheet_names.iter().any(|name| name == sheet_name) {
            return Err(ManifestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: sheet_name.to_string(),
                available: sheet_names,
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|source| ManifestError::Sheet {
                path: path.to_path_buf(),
                sheet: sheet_name.to_string(),
                source,
            })?;

        let column_not_found = || ManifestError::ColumnNotFound {
            path: path.to_path_buf(),
            sheet: sheet_name.to_string(),
            column: column.to_string(),
        };

        let mut rows = range.rows();
        let header = rows.next().ok_or_else(column_not_found)?;
        let col_idx = header
            .iter()
            .position(|cell| matches!(cell, Data::String(s) if s == column))
            .ok_or_else(column_not_found)?;

        let stems: HashSet<String> = rows
            .filter_map(|row| row.get(col_idx))
            .filter_map(cell_text)
            .collect();

        tracing::debug!(
            archive = %path.display(),
            sheet = sheet_name,
            column,
            column_index = col_idx,
            entries = stems.len(),
            "Archive loaded"
        );

        Ok(Self { stems })
    }

    /// Build a manifest directly from a list of stems.
    pub fn from_stems<I, S>(stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stems: stems.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `stem` is listed in the archive.
    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    /// Number of distinct stems listed.
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

/// Text a cell contributes to the stem set, if any.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if !s.is_empty() => Some(s.clone()),
        Data::Int(n) => Some(n.to_string()),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write a one-sheet workbook; `rows[0]` is the header row.
    fn write_archive(dir: &TempDir, sheet: &str, rows: &[&[&str]]) -> PathBuf {
        let path = dir.path().join("archive.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                worksheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_reads_filename_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(
            &dir,
            "Sheet1",
            &[
                &["Operator", "Filename", "Notes"],
                &["ab", "scan_001", "ok"],
                &["cd", "scan_002", ""],
            ],
        );
        let manifest = Manifest::load(&path, "Sheet1", "Filename").unwrap();
        assert_eq!(manifest.len(), 2);
        assert!(manifest.contains("scan_001"));
        assert!(manifest.contains("scan_002"));
        assert!(!manifest.contains("ab"), "other columns must be ignored");
    }

    #[test]
    fn test_load_numeric_cells_render_as_integers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numeric.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Filename").unwrap();
        worksheet.write_number(1, 0, 10452.0).unwrap();
        worksheet.write_string(2, 0, "scan_b").unwrap();
        workbook.save(&path).unwrap();

        let manifest = Manifest::load(&path, "Sheet1", "Filename").unwrap();
        assert!(manifest.contains("10452"), "numeric cell should match integer stem");
        assert!(manifest.contains("scan_b"));
    }

    #[test]
    fn test_load_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(&dir, "Runs", &[&["Filename"], &["a"]]);
        let result = Manifest::load(&path, "Sheet1", "Filename");
        match result {
            Err(ManifestError::SheetNotFound { available, .. }) => {
                assert_eq!(available, vec!["Runs".to_string()]);
            }
            other => panic!("expected SheetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(&dir, "Sheet1", &[&["Name", "Date"], &["a", "b"]]);
        let result = Manifest::load(&path, "Sheet1", "Filename");
        assert!(
            matches!(result, Err(ManifestError::ColumnNotFound { .. })),
            "expected ColumnNotFound, got {result:?}"
        );
    }

    #[test]
    fn test_load_column_match_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(&dir, "Sheet1", &[&["filename"], &["a"]]);
        let result = Manifest::load(&path, "Sheet1", "Filename");
        assert!(matches!(result, Err(ManifestError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Manifest::load(
            Path::new("/nonexistent/logfilechecker/archive.xlsx"),
            "Sheet1",
            "Filename",
        );
        assert!(matches!(result, Err(ManifestError::Open { .. })));
    }

    #[test]
    fn test_from_stems_and_contains() {
        let manifest = Manifest::from_stems(["x", "y"]);
        assert!(manifest.contains("x"));
        assert!(!manifest.contains("X"), "lookup is case-sensitive");
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_cell_text_normalisation() {
        assert_eq!(cell_text(&Data::Float(12.0)), Some("12".to_string()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".to_string()));
        assert_eq!(cell_text(&Data::Bool(true)), None);
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String(String::new())), None);
    }
}
