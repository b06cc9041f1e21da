//! Keyboard navigation handling

use super::app::Homedeck;
use crate::ui::focus::pipelines::{apply_actions, handle_direction, NavContext};
use crate::ui::focus::pure::map_key_to_nav;
use crate::ui::focus::NavInput;
use eframe::egui;

impl Homedeck {
    /// Process keyboard events from the raw input queue
    pub(super) fn process_keyboard_nav(&mut self, ctx: &egui::Context, raw_input: &egui::RawInput) {
        for event in &raw_input.events {
            if let egui::Event::Key {
                key,
                pressed: true,
                ..
            } = event
            {
                match map_key_to_nav(*key) {
                    Some(NavInput::Direction(direction)) => {
                        let nav_ctx = NavContext::from_cursor(&self.cursor);
                        let actions = handle_direction(&nav_ctx, direction);
                        apply_actions(&mut self.cursor, &actions);
                    }
                    Some(NavInput::Quit) => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    None => {}
                }
            }
        }
    }
}
