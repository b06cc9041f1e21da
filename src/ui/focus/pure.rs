pub mod input_map;
pub mod navigation;

// Re-exports
pub use input_map::{is_nav_key, map_key_to_nav};
pub use navigation::{apply_index_delta, navigate_home, HomeNav};
