// Color palette and egui visuals setup

use eframe::egui::{self, Color32, Stroke};

// Background layers
pub const BG_DARK: Color32 = Color32::from_rgb(18, 20, 26);
pub const BG_MID: Color32 = Color32::from_rgb(28, 31, 40);
pub const BG_LIGHT: Color32 = Color32::from_rgb(42, 46, 58);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 238, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(145, 152, 168);

// Selectable elements: gray when idle, red when the cursor is on them
pub const TILE_IDLE: Color32 = Color32::from_rgb(128, 128, 128);
pub const TILE_SELECTED: Color32 = Color32::from_rgb(205, 44, 44);

// Focus ring accent
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(100, 200, 255);

/// Stroke used to ring the focused element
pub fn focus_stroke() -> Stroke {
    Stroke::new(2.5, ACCENT_GLOW)
}

/// Apply the dark console theme to the egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.faint_bg_color = BG_MID;
    visuals.extreme_bg_color = BG_DARK;

    visuals.widgets.noninteractive.bg_fill = BG_MID;
    visuals.widgets.inactive.bg_fill = BG_LIGHT;
    visuals.widgets.hovered.bg_fill = BG_LIGHT;
    visuals.widgets.active.bg_fill = BG_LIGHT;

    visuals.selection.stroke = focus_stroke();

    ctx.set_visuals(visuals);
}
