// LogFileChecker - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI.
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Traversal mode
// =============================================================================

/// How the target directory is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TraversalMode {
    /// The target directory itself holds the log files.
    SingleFolder,
    /// Every immediate subdirectory of the target is a unit holding log files.
    #[default]
    ManyFolders,
}

impl TraversalMode {
    /// Label shown on the mode radio buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleFolder => "One Folder",
            Self::ManyFolders => "Many Folders",
        }
    }

    /// Parse a `[scan] default_mode` value, case-insensitive.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" | "one" | "single_folder" => Some(Self::SingleFolder),
            "many" | "many_folders" => Some(Self::ManyFolders),
            _ => None,
        }
    }
}

// =============================================================================
// Request / options
// =============================================================================

/// Everything a check needs from the operator, passed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    /// Spreadsheet listing already-archived log files.
    pub archive_path: Option<PathBuf>,

    /// Directory holding the log files (or the per-run subfolders).
    pub target_dir: Option<PathBuf>,

    pub mode: TraversalMode,
}

/// Archive and scan settings that normally come from config.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Worksheet to read from the archive.
    pub sheet_name: String,

    /// Header of the column listing known log-file stems.
    pub filename_column: String,

    /// Extension (no leading dot) identifying log files.
    pub log_extension: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            sheet_name: constants::DEFAULT_SHEET_NAME.to_string(),
            filename_column: constants::DEFAULT_FILENAME_COLUMN.to_string(),
            log_extension: constants::DEFAULT_LOG_EXTENSION.to_string(),
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// A log file found during a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredLog {
    /// File name without its extension; the key looked up in the archive.
    pub stem: String,

    /// Where the file actually lives on disk.
    pub path: PathBuf,

    /// Name of the unit (directory) the file was found in.
    pub unit: String,

    /// Whether the stem is listed in the archive.
    pub in_archive: bool,
}

/// Output of one reconciliation check.
///
/// `matched` and `unmatched` partition the stems of `discovered`; every
/// discovered log appears in exactly one of them, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Units (directories) that had no entries at all.
    pub empty_units: Vec<String>,

    /// Log-file stems found in the archive.
    pub matched: Vec<String>,

    /// Log-file stems missing from the archive.
    pub unmatched: Vec<String>,

    /// Every log file found, with its real path.
    pub discovered: Vec<DiscoveredLog>,

    /// Number of directories whose contents were listed.
    pub units_scanned: usize,

    /// Number of distinct stems the archive lists.
    pub manifest_entries: usize,

    /// Non-fatal listing problems (unreadable entries, non-UTF-8 names).
    pub warnings: Vec<String>,

    /// When the check finished.
    pub checked_at: DateTime<Utc>,
}

impl ClassificationResult {
    /// Total log files classified.
    pub fn total_logs(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// One-line summary for the status bar.
    pub fn summary_line(&self) -> String {
        format!(
            "Checked {} folder(s): {} log file(s), {} in archive, {} not in archive, {} empty folder(s).",
            self.units_scanned,
            self.total_logs(),
            self.matched.len(),
            self.unmatched.len(),
            self.empty_units.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_config_str() {
        assert_eq!(
            TraversalMode::from_config_str("Single"),
            Some(TraversalMode::SingleFolder)
        );
        assert_eq!(
            TraversalMode::from_config_str("many"),
            Some(TraversalMode::ManyFolders)
        );
        assert_eq!(TraversalMode::from_config_str("both"), None);
    }

    #[test]
    fn test_default_mode_is_many_folders() {
        assert_eq!(TraversalMode::default(), TraversalMode::ManyFolders);
    }

    #[test]
    fn test_summary_line_counts() {
        let result = ClassificationResult {
            empty_units: vec!["A".to_string()],
            matched: vec!["x".to_string(), "y".to_string()],
            unmatched: vec!["z".to_string()],
            discovered: Vec::new(),
            units_scanned: 3,
            manifest_entries: 10,
            warnings: Vec::new(),
            checked_at: Utc::now(),
        };
        assert_eq!(result.total_logs(), 3);
        let line = result.summary_line();
        assert!(line.contains("3 folder(s)"), "got: {line}");
        assert!(line.contains("2 in archive"), "got: {line}");
        assert!(line.contains("1 not in archive"), "got: {line}");
    }
}
