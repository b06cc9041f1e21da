pub mod highlight;

// Re-exports
pub use highlight::{draw_focus_ring, draw_focus_ring_styled, selection_fill, FocusRingStyle};
