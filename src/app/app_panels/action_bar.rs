use crate::app::app::Homedeck;
use crate::ui::focus::operations::{draw_focus_ring, selection_fill};
use crate::ui::focus::types::FocusRegion;

use eframe::egui::{self, Ui};

/// Minimum size of one action bar button
const BAR_BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(120.0, 40.0);
/// Gap between bar buttons
const BAR_SPACING: f32 = 20.0;

impl Homedeck {
    /// Bottom bar: one row of system action buttons
    pub fn display_action_bar(&mut self, ui: &mut Ui) {
        let count = self.bar_items.len();
        let bar_width = count as f32 * BAR_BUTTON_SIZE.x + (count - 1) as f32 * BAR_SPACING;
        let h_pad = ((ui.available_width() - bar_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(h_pad);
            ui.spacing_mut().item_spacing = egui::vec2(BAR_SPACING, 0.0);
            for index in 0..count {
                let selected = self.cursor.is_selected(FocusRegion::Bar, index);
                let bar_btn = ui.add(
                    egui::Button::new(self.bar_items[index].text())
                        .min_size(BAR_BUTTON_SIZE)
                        .fill(selection_fill(selected)),
                );
                if selected {
                    draw_focus_ring(ui, bar_btn.rect);
                }
                if bar_btn.clicked() {
                    self.cursor.region = FocusRegion::Bar;
                    self.cursor.bar_index = index;
                }
            }
        });
    }
}
