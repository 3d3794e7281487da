// LogFileChecker - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every failure a check can hit is a variant here; nothing is reported by
// printing. The GUI decides how to surface each one.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogFileChecker operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogCheckError {
    /// The reconciliation check could not run.
    Check(CheckError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Export of check results failed.
    Export(ExportError),
}

impl fmt::Display for LogCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check(e) => write!(f, "Check error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for LogCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Check(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Check errors
// ---------------------------------------------------------------------------

/// Conditions that stop a reconciliation check before it produces a result.
///
/// All of these are user-recoverable: the operator fixes the selection and
/// presses Check again.
#[derive(Debug)]
pub enum CheckError {
    /// No archive file was selected.
    MissingArchive,

    /// No target directory was selected.
    MissingDirectory,

    /// The selected target directory does not exist.
    TargetNotFound { path: PathBuf },

    /// The selected target path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// Many-folders mode was chosen but the target has no subdirectories.
    NoSubdirectories { path: PathBuf },

    /// A directory listing failed part-way through.
    DirectoryRead {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// The archive could not be loaded.
    Manifest(ManifestError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArchive => write!(
                f,
                "An archive file needs to be selected. Please select one and try again."
            ),
            Self::MissingDirectory => write!(
                f,
                "A target directory needs to be selected. Please select one and try again."
            ),
            Self::TargetNotFound { path } => {
                write!(f, "Target directory '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Target path '{}' is not a directory", path.display())
            }
            Self::NoSubdirectories { path } => write!(
                f,
                "No subdirectories identified in '{}'. Please fix and try again, \
                 or switch to One Folder mode.",
                path.display()
            ),
            Self::DirectoryRead { path, source } => {
                write!(f, "Cannot list '{}': {source}", path.display())
            }
            Self::Manifest(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryRead { source, .. } => Some(source),
            Self::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ManifestError> for CheckError {
    fn from(e: ManifestError) -> Self {
        Self::Manifest(e)
    }
}

impl From<CheckError> for LogCheckError {
    fn from(e: CheckError) -> Self {
        Self::Check(e)
    }
}

// ---------------------------------------------------------------------------
// Manifest errors
// ---------------------------------------------------------------------------

/// Errors related to reading the archive spreadsheet.
#[derive(Debug)]
pub enum ManifestError {
    /// The workbook could not be opened or its format was not recognised.
    Open {
        path: PathBuf,
        source: calamine::Error,
    },

    /// The configured worksheet is not present in the workbook.
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// The worksheet exists but its cells could not be read.
    Sheet {
        path: PathBuf,
        sheet: String,
        source: calamine::Error,
    },

    /// The worksheet header row has no column with the configured name.
    ColumnNotFound {
        path: PathBuf,
        sheet: String,
        column: String,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Cannot open archive '{}': {source}", path.display())
            }
            Self::SheetNotFound {
                path,
                sheet,
                available,
            } => write!(
                f,
                "Archive '{}' has no sheet named '{sheet}' (found: {})",
                path.display(),
                available.join(", ")
            ),
            Self::Sheet {
                path,
                sheet,
                source,
            } => write!(
                f,
                "Cannot read sheet '{sheet}' of archive '{}': {source}",
                path.display()
            ),
            Self::ColumnNotFound {
                path,
                sheet,
                column,
            } => write!(
                f,
                "Sheet '{sheet}' of archive '{}' has no '{column}' column",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Sheet { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ManifestError> for LogCheckError {
    fn from(e: ManifestError) -> Self {
        Self::Check(CheckError::Manifest(e))
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting check results.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LogCheckError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogCheckError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogFileChecker results.
pub type Result<T> = std::result::Result<T, LogCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_no_subdirectories_message_names_path() {
        let err = CheckError::NoSubdirectories {
            path: PathBuf::from("/data/run42"),
        };
        let msg = err.to_string();
        assert!(msg.contains("run42"), "got: {msg}");
        assert!(msg.contains("No subdirectories"), "got: {msg}");
    }

    #[test]
    fn test_manifest_error_chains_through_check_error() {
        let err: LogCheckError = ManifestError::ColumnNotFound {
            path: PathBuf::from("archive.xlsx"),
            sheet: "Sheet1".to_string(),
            column: "Filename".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            LogCheckError::Check(CheckError::Manifest(ManifestError::ColumnNotFound { .. }))
        ));
        let check = err.source().expect("top-level error has a source");
        assert!(check.source().is_some(), "check error should expose manifest cause");
    }

    #[test]
    fn test_sheet_not_found_lists_available_sheets() {
        let err = ManifestError::SheetNotFound {
            path: PathBuf::from("archive.xlsx"),
            sheet: "Sheet1".to_string(),
            available: vec!["Runs".to_string(), "Notes".to_string()],
        };
        assert!(err.to_string().contains("Runs, Notes"));
    }
}
