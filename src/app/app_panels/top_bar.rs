use crate::app::app::Homedeck;
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};

impl Homedeck {
    /// Top status bar: spacer on the left, live clock on the right
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                    .small()
                    .color(theme::TEXT_MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&self.clock_text)
                        .size(16.0)
                        .color(theme::TEXT_PRIMARY),
                );
            });
        });
    }
}
