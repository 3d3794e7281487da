// LogFileChecker - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and runs checks requested by them.

use crate::app::state::{AppState, ExportFormat};
use crate::ui;
use crate::util::constants;

/// The Log File Checker application.
pub struct LogFileCheckerApp {
    pub state: AppState,
}

impl LogFileCheckerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Ask for a destination and export the current result.
    fn export(&mut self, format: ExportFormat) {
        let ext = format.extension();
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(ext.to_uppercase(), &[ext])
            .set_file_name(format!("{}.{ext}", constants::DEFAULT_EXPORT_STEM))
            .save_file()
        else {
            return;
        };
        match self.state.export_results(&dest, format) {
            Ok(n) => {
                self.state.status_message = format!("Exported {n} rows to {}.", dest.display());
                self.state.status_is_error = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                self.state.status_message = e.to_string();
                self.state.status_is_error = true;
            }
        }
    }
}

impl eframe::App for LogFileCheckerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Handle flags set by the controls panel ----
        // The check runs synchronously; the window is unresponsive until it
        // returns, which is acceptable for single-level listings.
        if self.state.request_check {
            self.state.request_check = false;
            self.state.run_check();
        }
        if self.state.request_reset {
            self.state.request_reset = false;
            self.state.reset();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Select Archive File\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Spreadsheet", constants::ARCHIVE_FILE_EXTENSIONS)
                            .pick_file()
                        {
                            self.state.archive_path = Some(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Select Data Folder(s)\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new().pick_folder() {
                            self.state.target_dir = Some(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only once a check has produced a result
                    let has_result = self.state.result.is_some();
                    ui.add_enabled_ui(has_result, |ui| {
                        ui.menu_button("Export Results", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                self.export(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                self.export(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.status_is_error {
                    ui.colored_label(ui::theme::STATUS_ERROR, &self.state.status_message);
                } else {
                    ui.label(&self.state.status_message);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref result) = self.state.result {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} archive entries \u{00b7} checked {}",
                                result.manifest_entries,
                                result
                                    .checked_at
                                    .with_timezone(&chrono::Local)
                                    .format("%H:%M:%S")
                            ))
                            .weak(),
                        );
                    }
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Log File Check Tool").strong());
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .small()
                        .italics(),
                );
            });
            ui.separator();
            ui::panels::controls::render(ui, &mut self.state);
            ui.add_space(6.0);
            ui.separator();
            ui::panels::results::render(ui, &self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
