pub mod handle_input;

// Re-exports
pub use handle_input::{apply_actions, handle_direction, NavAction, NavContext};
