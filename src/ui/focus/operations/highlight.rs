// Selection highlight rendering (egui-dependent)

use eframe::egui::{Color32, Rect, Stroke, StrokeKind, Ui};

use crate::ui::theme;

/// Focus ring styling configuration
pub struct FocusRingStyle {
    pub stroke_width: f32,
    pub color: Color32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for FocusRingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.5,
            color: theme::ACCENT_GLOW,
            corner_radius: 6.0,
            padding: 2.0,
        }
    }
}

/// Fill color for a selectable element: red under the cursor, gray otherwise
pub fn selection_fill(selected: bool) -> Color32 {
    if selected {
        theme::TILE_SELECTED
    } else {
        theme::TILE_IDLE
    }
}

/// Draw a focus ring around a rectangle
pub fn draw_focus_ring(ui: &Ui, rect: Rect) {
    draw_focus_ring_styled(ui, rect, &FocusRingStyle::default());
}

/// Draw a focus ring with custom styling
pub fn draw_focus_ring_styled(ui: &Ui, rect: Rect, style: &FocusRingStyle) {
    let expanded = rect.expand(style.padding);
    let corner_radius = style.corner_radius as u8;
    ui.painter().rect_stroke(
        expanded,
        corner_radius,
        Stroke::new(style.stroke_width, style.color),
        StrokeKind::Outside,
    );
}
