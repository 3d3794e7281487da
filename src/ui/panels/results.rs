// LogFileChecker - ui/panels/results.rs
//
// The three result lists side by side: Empty Folders, Log Files in Archive,
// Log Files NOT in Archive. Each list scrolls independently and has a Copy
// button that puts its contents on the clipboard, one name per line.
// Config warnings and listing warnings from the last check are shown
// beneath the lists.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the result columns.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let (empty, matched, unmatched) = state.result_lists();

    ui.columns(3, |cols| {
        result_list(
            &mut cols[0],
            "Empty Folders",
            theme::EMPTY_FOLDER_COLOUR,
            empty,
        );
        result_list(
            &mut cols[1],
            "Log Files in Archive",
            theme::IN_ARCHIVE_COLOUR,
            matched,
        );
        result_list(
            &mut cols[2],
            "Log Files NOT in Archive",
            theme::NOT_IN_ARCHIVE_COLOUR,
            unmatched,
        );
    });

    let total = state.config_warnings.len() + state.warnings.len();
    if total > 0 {
        ui.add_space(8.0);
        ui.separator();
        ui.strong(format!("Warnings ({total})"));
        egui::ScrollArea::vertical()
            .id_salt("result_warnings")
            .max_height(100.0)
            .show(ui, |ui| {
                for warn in state.config_warnings.iter().chain(&state.warnings) {
                    ui.label(
                        egui::RichText::new(warn)
                            .color(theme::WARNING_TEXT)
                            .size(11.5),
                    );
                }
            });
    }
}

fn result_list(ui: &mut egui::Ui, title: &str, colour: egui::Color32, items: &[String]) {
    ui.set_min_width(constants::RESULT_LIST_MIN_WIDTH);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{title} ({})", items.len()))
                .strong()
                .underline()
                .color(colour),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let copy = ui.add_enabled(!items.is_empty(), egui::Button::new("Copy").small());
            if copy.on_hover_text("Copy this list to the clipboard").clicked() {
                ui.ctx().copy_text(items.join("\n"));
            }
        });
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(title)
            .min_scrolled_height(constants::RESULT_LIST_HEIGHT)
            .max_height(constants::RESULT_LIST_HEIGHT)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for item in items {
                    ui.label(egui::RichText::new(item).monospace());
                }
            });
    });
}
