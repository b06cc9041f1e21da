use crate::app::app::Homedeck;
use crate::ui::focus::operations::{draw_focus_ring, selection_fill};
use crate::ui::focus::types::{FocusRegion, GRID_COLS};
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};

/// Edge length of a game tile in points
const TILE_SIZE: f32 = 200.0;
/// Gap between tiles, matching the row gap
const TILE_SPACING: f32 = 20.0;

impl Homedeck {
    /// Central panel: two centered rows of four game tiles
    pub fn display_tile_grid(&mut self, ui: &mut Ui) {
        let rows = self.tiles.len().div_ceil(GRID_COLS);
        let grid_width = GRID_COLS as f32 * TILE_SIZE + (GRID_COLS - 1) as f32 * TILE_SPACING;
        let grid_height = rows as f32 * TILE_SIZE + (rows - 1) as f32 * TILE_SPACING;

        let h_pad = ((ui.available_width() - grid_width) / 2.0).max(0.0);
        let v_pad = ((ui.available_height() - grid_height) / 2.0).max(0.0);

        ui.add_space(v_pad);
        ui.spacing_mut().item_spacing = egui::vec2(TILE_SPACING, TILE_SPACING);

        for row in 0..rows {
            ui.horizontal(|ui| {
                ui.add_space(h_pad);
                for col in 0..GRID_COLS {
                    let index = row * GRID_COLS + col;
                    if index < self.tiles.len() {
                        self.display_tile(ui, index);
                    }
                }
            });
        }
    }

    fn display_tile(&mut self, ui: &mut Ui, index: usize) {
        let selected = self.cursor.is_selected(FocusRegion::Grid, index);
        let label = RichText::new(self.tiles[index].label.as_str())
            .size(15.0)
            .color(theme::TEXT_PRIMARY);

        let tile_btn = ui.add(
            egui::Button::new(label)
                .min_size(egui::vec2(TILE_SIZE, TILE_SIZE))
                .fill(selection_fill(selected)),
        );
        if selected {
            draw_focus_ring(ui, tile_btn.rect);
        }
        if tile_btn.clicked() {
            self.cursor.region = FocusRegion::Grid;
            self.cursor.grid_index = index;
        }
    }
}
