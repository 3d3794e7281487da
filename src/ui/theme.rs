// LogFileChecker - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Heading colours for the three result columns.
pub const EMPTY_FOLDER_COLOUR: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600
pub const IN_ARCHIVE_COLOUR: Color32 = Color32::from_rgb(74, 222, 128); // Green 400
pub const NOT_IN_ARCHIVE_COLOUR: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Status bar text colour when the last action failed.
pub const STATUS_ERROR: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Warning text colour.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const SELECTION_LABEL_WIDTH: f32 = 520.0;
pub const BUTTON_WIDTH: f32 = 170.0;

/// Apply the configured light/dark visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
