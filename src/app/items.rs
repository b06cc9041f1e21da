//! Tile and action-bar item definitions

use egui_phosphor::regular as icons;

use crate::app::config::HomedeckConfig;
use crate::ui::focus::types::TILE_COUNT;

/// Label shown on tiles with no game assigned
pub const PLACEHOLDER_LABEL: &str = "[empty]";

/// A selectable game/app slot in the grid
#[derive(Debug, Clone)]
pub struct GameTile {
    pub label: String,
}

/// A button in the bottom action bar
#[derive(Debug, Clone)]
pub struct BarItem {
    pub label: &'static str,
    pub icon: &'static str,
}

impl BarItem {
    /// Icon glyph followed by the label, for button text
    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// Build the eight game tiles, taking labels from config where present
pub fn build_tiles(options: &HomedeckConfig) -> Vec<GameTile> {
    (0..TILE_COUNT)
        .map(|i| GameTile {
            label: options
                .tile_labels
                .get(i)
                .filter(|l| !l.is_empty())
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string()),
        })
        .collect()
}

/// The fixed system action bar
pub fn build_bar_items() -> Vec<BarItem> {
    vec![
        BarItem {
            label: "News",
            icon: icons::NEWSPAPER,
        },
        BarItem {
            label: "Shop",
            icon: icons::STOREFRONT,
        },
        BarItem {
            label: "Album",
            icon: icons::IMAGES,
        },
        BarItem {
            label: "Controllers",
            icon: icons::GAME_CONTROLLER,
        },
        BarItem {
            label: "System Settings",
            icon: icons::GEAR,
        },
        BarItem {
            label: "Sleep Mode",
            icon: icons::MOON,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::types::BAR_COUNT;

    #[test]
    fn test_tiles_pad_to_grid_size() {
        let options = HomedeckConfig {
            fullscreen: false,
            tile_labels: vec!["Zelda".into(), String::new()],
        };
        let tiles = build_tiles(&options);
        assert_eq!(tiles.len(), TILE_COUNT);
        assert_eq!(tiles[0].label, "Zelda");
        assert_eq!(tiles[1].label, PLACEHOLDER_LABEL, "empty labels fall back");
        assert_eq!(tiles[7].label, PLACEHOLDER_LABEL);
    }

    #[test]
    fn test_extra_labels_are_ignored() {
        let options = HomedeckConfig {
            fullscreen: false,
            tile_labels: (0..12).map(|i| format!("game {i}")).collect(),
        };
        assert_eq!(build_tiles(&options).len(), TILE_COUNT);
    }

    #[test]
    fn test_bar_has_six_items() {
        let items = build_bar_items();
        assert_eq!(items.len(), BAR_COUNT);
        assert!(items.iter().all(|item| !item.icon.is_empty()));
    }
}
