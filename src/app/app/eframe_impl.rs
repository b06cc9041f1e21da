//! eframe::App implementation for Homedeck

use super::Homedeck;
use crate::clock::format_clock;
use crate::ui::theme;
use eframe::egui;

impl eframe::App for Homedeck {
    fn raw_input_hook(&mut self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        self.process_keyboard_nav(ctx, raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Paint full-screen background to fill any gaps between panels
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, theme::BG_DARK);

        self.clock_text = format_clock(chrono::Local::now().naive_local());

        egui::TopBottomPanel::top("status_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_MID)
                    .inner_margin(egui::Margin::symmetric(20, 10)),
            )
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        egui::TopBottomPanel::bottom("action_bar_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_MID)
                    .inner_margin(egui::Margin::symmetric(20, 12)),
            )
            .show(ctx, |ui| {
                self.display_action_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_DARK)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                self.display_tile_grid(ui);
            });

        // Keep the clock label advancing while the menu sits idle; input
        // events trigger their own repaints.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}
