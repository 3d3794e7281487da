// LogFileChecker - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Log File Checker";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogFileChecker";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Archive (manifest) defaults
// =============================================================================

/// Worksheet read from the archive file unless overridden in config.toml.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Header of the archive column that lists known log-file stems.
pub const DEFAULT_FILENAME_COLUMN: &str = "Filename";

/// File extensions offered by the "Select Archive File" dialog.
pub const ARCHIVE_FILE_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Maximum length of a configured sheet or column name.
/// Excel caps sheet names at 31 characters; headers are allowed more room.
pub const MAX_SHEET_NAME_LENGTH: usize = 31;
pub const MAX_COLUMN_NAME_LENGTH: usize = 255;

// =============================================================================
// Scan defaults
// =============================================================================

/// Extension (without the leading dot) that marks a file as a log file.
/// Compared case-sensitively against the file's final extension.
pub const DEFAULT_LOG_EXTENSION: &str = "log";

/// Maximum length of a configured log extension.
pub const MAX_LOG_EXTENSION_LENGTH: usize = 16;

/// Maximum number of non-fatal listing warnings retained per check.
pub const MAX_WARNINGS: usize = 1_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Width of each result list column in points.
pub const RESULT_LIST_MIN_WIDTH: f32 = 220.0;

/// Height of each result list scroll area in points.
pub const RESULT_LIST_HEIGHT: f32 = 360.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Recognised values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default file name offered when exporting results.
pub const DEFAULT_EXPORT_STEM: &str = "log_check_results";
