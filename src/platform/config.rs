// LogFileChecker - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. The config file is only ever read; nothing
// the user changes in the window is written back.

use crate::core::model::TraversalMode;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogFileChecker configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logfilechecker/ or %APPDATA%\LogFileChecker\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[manifest]` section.
    pub manifest: ManifestSection,
    /// `[scan]` section.
    pub scan: ScanSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[manifest]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ManifestSection {
    /// Worksheet holding the archive table.
    pub sheet_name: Option<String>,
    /// Header of the filename column.
    pub filename_column: Option<String>,
}

/// `[scan]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Log file extension, with or without the leading dot.
    pub log_extension: Option<String>,
    /// "single" or "many".
    pub default_mode: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Initial state of the "Keep when reset?" checkbox.
    pub keep_archive_on_reset: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Manifest --
    pub sheet_name: String,
    pub filename_column: String,

    // -- Scan --
    /// Extension without the leading dot.
    pub log_extension: String,
    /// Mode selected when the window opens.
    pub default_mode: TraversalMode,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub keep_archive_on_reset: bool,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_name: constants::DEFAULT_SHEET_NAME.to_string(),
            filename_column: constants::DEFAULT_FILENAME_COLUMN.to_string(),
            log_extension: constants::DEFAULT_LOG_EXTENSION.to_string(),
            default_mode: TraversalMode::default(),
            dark_mode: true,
            keep_archive_on_reset: false,
            log_level: None,
        }
    }
}

/// Read and parse config.toml without validating values.
///
/// `Ok(None)` means the file does not exist (first run).
pub fn read_config_file(config_path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(Some(raw))
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_config_file(&config_path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, value_errors) = validate(raw);
    for err in value_errors {
        warnings.push(err.to_string());
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all errors.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut errors = Vec::new();

    // -- Manifest: sheet_name --
    if let Some(sheet) = raw.manifest.sheet_name {
        if valid_name(&sheet, constants::MAX_SHEET_NAME_LENGTH) {
            config.sheet_name = sheet;
        } else {
            errors.push(out_of_range(
                "manifest.sheet_name",
                &sheet,
                format!(
                    "1-{} characters. Using default ({}).",
                    constants::MAX_SHEET_NAME_LENGTH,
                    constants::DEFAULT_SHEET_NAME
                ),
            ));
        }
    }

    // -- Manifest: filename_column --
    if let Some(column) = raw.manifest.filename_column {
        if valid_name(&column, constants::MAX_COLUMN_NAME_LENGTH) {
            config.filename_column = column;
        } else {
            errors.push(out_of_range(
                "manifest.filename_column",
                &column,
                format!(
                    "1-{} characters. Using default ({}).",
                    constants::MAX_COLUMN_NAME_LENGTH,
                    constants::DEFAULT_FILENAME_COLUMN
                ),
            ));
        }
    }

    // -- Scan: log_extension --
    if let Some(ext) = raw.scan.log_extension {
        let trimmed = ext.trim_start_matches('.');
        let ok = !trimmed.is_empty()
            && trimmed.len() <= constants::MAX_LOG_EXTENSION_LENGTH
            && !trimmed.contains(['.', '/', '\\']);
        if ok {
            config.log_extension = trimmed.to_string();
        } else {
            errors.push(out_of_range(
                "scan.log_extension",
                &ext,
                format!(
                    "a single extension such as \"log\". Using default ({}).",
                    constants::DEFAULT_LOG_EXTENSION
                ),
            ));
        }
    }

    // -- Scan: default_mode --
    if let Some(mode) = raw.scan.default_mode {
        match TraversalMode::from_config_str(&mode) {
            Some(parsed) => config.default_mode = parsed,
            None => errors.push(out_of_range(
                "scan.default_mode",
                &mode,
                "\"single\" or \"many\". Using default (many).".to_string(),
            )),
        }
    }

    // -- UI: theme --
    if let Some(theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => errors.push(out_of_range(
                "ui.theme",
                &theme,
                "\"dark\" or \"light\". Using default (dark).".to_string(),
            )),
        }
    }

    if let Some(keep) = raw.ui.keep_archive_on_reset {
        config.keep_archive_on_reset = keep;
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            errors.push(out_of_range(
                "logging.level",
                &level,
                "error, warn, info, debug, or trace. Using default (info).".to_string(),
            ));
        }
    }

    (config, errors)
}

fn valid_name(s: &str, max_len: usize) -> bool {
    !s.trim().is_empty() && s.chars().count() <= max_len
}

fn out_of_range(field: &str, value: &str, expected: String) -> ConfigError {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
}
