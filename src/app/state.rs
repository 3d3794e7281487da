// LogFileChecker - app/state.rs
//
// Application state management. Holds the operator's selections, the most
// recent check result, and the flags panels use to request actions.
// Owned by the eframe::App implementation.
//
// Every check is driven by an explicit CheckRequest built from this state,
// so the checker itself never reads UI fields.

use crate::core::checker;
use crate::core::export;
use crate::core::model::{CheckOptions, CheckRequest, ClassificationResult, TraversalMode};
use crate::util::error::{ExportError, Result};
use std::path::{Path, PathBuf};

/// Output format for File > Export Results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Selected archive spreadsheet (None until the user picks one).
    pub archive_path: Option<PathBuf>,

    /// Selected data folder (None until the user picks one).
    pub target_dir: Option<PathBuf>,

    /// One Folder / Many Folders selection.
    pub mode: TraversalMode,

    /// "Keep when reset?" checkbox.
    pub keep_archive_on_reset: bool,

    /// Archive and scan settings from config.toml.
    pub options: CheckOptions,

    /// Result of the most recent successful check.
    pub result: Option<ClassificationResult>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether the status message describes a problem.
    pub status_is_error: bool,

    /// Problems found in config.toml at startup.
    pub config_warnings: Vec<String>,

    /// Listing warnings from the most recent check.
    pub warnings: Vec<String>,

    /// Set by the controls panel; consumed by gui.rs each frame.
    pub request_check: bool,

    /// Set by the controls panel; consumed by gui.rs each frame.
    pub request_reset: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state.
    pub fn new(options: CheckOptions, debug_mode: bool) -> Self {
        Self {
            archive_path: None,
            target_dir: None,
            mode: TraversalMode::default(),
            keep_archive_on_reset: false,
            options,
            result: None,
            status_message: "Ready. Select an archive file and a data folder.".to_string(),
            status_is_error: false,
            config_warnings: Vec::new(),
            warnings: Vec::new(),
            request_check: false,
            request_reset: false,
            show_about: false,
            debug_mode,
        }
    }

    /// Build the explicit request for the current selections.
    pub fn build_request(&self) -> CheckRequest {
        CheckRequest {
            archive_path: self.archive_path.clone(),
            target_dir: self.target_dir.clone(),
            mode: self.mode,
        }
    }

    /// Run a check synchronously and record its outcome.
    ///
    /// On failure the previous result is cleared so the lists never show
    /// results that do not belong to the current selection.
    pub fn run_check(&mut self) {
        let request = self.build_request();
        match checker::check(&request, &self.options) {
            Ok(result) => {
                self.status_message = result.summary_line();
                self.status_is_error = false;
                self.warnings = result.warnings.clone();
                self.result = Some(result);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Check did not run");
                self.status_message = e.to_string();
                self.status_is_error = true;
                self.result = None;
                self.warnings.clear();
            }
        }
    }

    /// Clear results and the data-folder selection.
    ///
    /// The archive selection survives only when `keep_archive_on_reset` is set.
    pub fn reset(&mut self) {
        if !self.keep_archive_on_reset {
            self.archive_path = None;
        }
        self.target_dir = None;
        self.result = None;
        self.warnings.clear();
        self.status_message = "Ready.".to_string();
        self.status_is_error = false;
        tracing::debug!(
            kept_archive = self.archive_path.is_some(),
            "State reset"
        );
    }

    /// Display lists for the three result columns: (empty, matched, unmatched).
    pub fn result_lists(&self) -> (&[String], &[String], &[String]) {
        const NONE: &[String] = &[];
        match &self.result {
            Some(r) => (
                r.empty_units.as_slice(),
                r.matched.as_slice(),
                r.unmatched.as_slice(),
            ),
            None => (NONE, NONE, NONE),
        }
    }

    /// Write the current result to `dest`. Returns the number of rows written.
    pub fn export_results(&self, dest: &Path, format: ExportFormat) -> Result<usize> {
        let Some(result) = &self.result else {
            return Ok(0);
        };
        let file = std::fs::File::create(dest).map_err(|source| ExportError::Io {
            path: dest.to_path_buf(),
            source,
        })?;
        let count = match format {
            ExportFormat::Csv => export::export_csv(result, file, dest)?,
            ExportFormat::Json => export::export_json(result, file, dest)?,
        };
        tracing::info!(dest = %dest.display(), rows = count, "Results exported");
        Ok(count)
    }
}
