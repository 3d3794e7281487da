// LogFileChecker - ui/panels/controls.rs
//
// Selection controls at the top of the window:
//   1. Select Archive File + selected path + "Keep when reset?"
//   2. Select Data Folder(s) + selected path + One / Many folder mode
//   3. Check for Log Files / Reset
//
// Picking a file or folder updates state directly. Check and Reset only
// set `state.request_check` / `state.request_reset`; gui.rs consumes them.

use crate::app::state::AppState;
use crate::core::model::TraversalMode;
use crate::ui::theme;
use crate::util::constants;

/// Render the selection controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Grid::new("selection_controls")
        .num_columns(3)
        .spacing([10.0, 8.0])
        .show(ui, |ui| {
            // -----------------------------------------------------------------
            // Archive file
            // -----------------------------------------------------------------
            if ui
                .add_sized(
                    [theme::BUTTON_WIDTH, 24.0],
                    egui::Button::new("Select Archive File"),
                )
                .on_hover_text("Spreadsheet listing the log files already archived")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Spreadsheet", constants::ARCHIVE_FILE_EXTENSIONS)
                    .pick_file()
                {
                    tracing::debug!(archive = %path.display(), "Archive selected");
                    state.archive_path = Some(path);
                }
            }
            selection_label(ui, "Selected Archive File", state.archive_path.as_deref());
            ui.checkbox(&mut state.keep_archive_on_reset, "Keep when reset?")
                .on_hover_text("Keep the selected archive file when Reset / Clear is pressed");
            ui.end_row();

            // -----------------------------------------------------------------
            // Data folder
            // -----------------------------------------------------------------
            if ui
                .add_sized(
                    [theme::BUTTON_WIDTH, 24.0],
                    egui::Button::new("Select Data Folder(s)"),
                )
                .on_hover_text("Folder holding the log files, or one subfolder per run")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new().pick_folder() {
                    tracing::debug!(target_dir = %path.display(), "Data folder selected");
                    state.target_dir = Some(path);
                }
            }
            selection_label(ui, "Selected Folder(s)", state.target_dir.as_deref());
            ui.vertical(|ui| {
                for mode in [TraversalMode::SingleFolder, TraversalMode::ManyFolders] {
                    ui.radio_value(&mut state.mode, mode, mode.label());
                }
            });
            ui.end_row();

            // -----------------------------------------------------------------
            // Actions
            // -----------------------------------------------------------------
            if ui
                .add_sized(
                    [theme::BUTTON_WIDTH, 28.0],
                    egui::Button::new(egui::RichText::new("Check for Log Files").strong()),
                )
                .clicked()
            {
                state.request_check = true;
            }
            ui.label("");
            if ui.button("Reset / Clear").clicked() {
                state.request_reset = true;
            }
            ui.end_row();
        });
}

/// A framed, single-line display of a selected path.
fn selection_label(ui: &mut egui::Ui, title: &str, path: Option<&std::path::Path>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(theme::SELECTION_LABEL_WIDTH);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).small().weak());
            let text = path
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.add(egui::Label::new(egui::RichText::new(text).monospace()).truncate());
        });
    });
}
