// LogFileChecker - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use logfilechecker::app;
pub use logfilechecker::core;
pub use logfilechecker::platform;
pub use logfilechecker::ui;
pub use logfilechecker::util;

use clap::Parser;
use logfilechecker::core::model::{CheckOptions, TraversalMode};
use std::path::PathBuf;

/// Log File Checker - reconcile instrument log files against an archive spreadsheet.
///
/// Arguments only pre-fill the window; the check itself is always started
/// from the GUI.
#[derive(Parser, Debug)]
#[command(name = "LogFileChecker", version, about)]
struct Cli {
    /// Data folder to pre-select.
    path: Option<PathBuf>,

    /// Archive spreadsheet to pre-select.
    #[arg(short = 'a', long = "archive")]
    archive: Option<PathBuf>,

    /// Start in One Folder mode instead of Many Folders.
    #[arg(short = 's', long = "single-folder")]
    single_folder: bool,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can apply; its
    // warnings are replayed once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "LogFileChecker starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let options = CheckOptions {
        sheet_name: config.sheet_name.clone(),
        filename_column: config.filename_column.clone(),
        log_extension: config.log_extension.clone(),
    };

    let mut state = app::state::AppState::new(options, cli.debug);
    state.keep_archive_on_reset = config.keep_archive_on_reset;
    state.mode = if cli.single_folder {
        TraversalMode::SingleFolder
    } else {
        config.default_mode
    };
    state.archive_path = cli.archive;
    state.target_dir = cli.path;
    state.config_warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([780.0, 520.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::LogFileCheckerApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Log File Checker GUI: {e}");
        std::process::exit(1);
    }
}
