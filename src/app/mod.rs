mod app;
mod app_input;
mod app_panels;
mod config;
mod items;

pub use app::Homedeck;
pub use config::{load_cfg, save_cfg, HomedeckConfig};
