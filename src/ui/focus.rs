pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use types::{CursorState, FocusRegion, NavDirection, NavInput};
