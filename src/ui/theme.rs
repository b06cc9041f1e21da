pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, focus_stroke, ACCENT_GLOW, BG_DARK, BG_LIGHT, BG_MID, TEXT_MUTED, TEXT_PRIMARY,
    TILE_IDLE, TILE_SELECTED,
};
