// Input mapping from keyboard keys to navigation inputs

use eframe::egui::Key;

use crate::ui::focus::types::{NavDirection, NavInput};

/// Map a pressed key to a navigation input
pub fn map_key_to_nav(key: Key) -> Option<NavInput> {
    match key {
        // Arrows → Directional navigation
        Key::ArrowUp => Some(NavInput::Direction(NavDirection::Up)),
        Key::ArrowDown => Some(NavInput::Direction(NavDirection::Down)),
        Key::ArrowLeft => Some(NavInput::Direction(NavDirection::Left)),
        Key::ArrowRight => Some(NavInput::Direction(NavDirection::Right)),

        // Escape closes the window
        Key::Escape => Some(NavInput::Quit),

        // Not navigation inputs
        _ => None,
    }
}

/// Check if a key participates in menu navigation
pub fn is_nav_key(key: Key) -> bool {
    map_key_to_nav(key).is_some()
}
