// Core app structure and construction

mod eframe_impl;

use super::config::{load_cfg, HomedeckConfig};
use super::items::{build_bar_items, build_tiles, BarItem, GameTile};
use crate::ui::focus::CursorState;

pub struct Homedeck {
    pub options: HomedeckConfig,
    pub tiles: Vec<GameTile>,
    pub bar_items: Vec<BarItem>,
    pub cursor: CursorState,
    pub clock_text: String,
}

impl Default for Homedeck {
    fn default() -> Self {
        Self::new()
    }
}

impl Homedeck {
    pub fn new() -> Self {
        let options = load_cfg();
        let tiles = build_tiles(&options);
        let bar_items = build_bar_items();

        let named = tiles
            .iter()
            .filter(|t| t.label != super::items::PLACEHOLDER_LABEL)
            .count();
        println!("[homedeck] {} of {} tiles have labels", named, tiles.len());

        Self {
            options,
            tiles,
            bar_items,
            cursor: CursorState::default(),
            clock_text: String::new(),
        }
    }
}
