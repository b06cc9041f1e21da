use crate::paths::PATH_HOMEDECK;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct HomedeckConfig {
    /// Start with a fullscreen window
    #[serde(default)]
    pub fullscreen: bool,
    /// Labels for the game tiles, in grid order. Missing or empty entries
    /// show as the placeholder label; entries past the eighth are ignored.
    #[serde(default)]
    pub tile_labels: Vec<String>,
}

pub fn load_cfg() -> HomedeckConfig {
    let path = PATH_HOMEDECK.join("settings.json");

    if let Ok(file) = File::open(path) {
        if let Ok(config) = serde_json::from_reader::<_, HomedeckConfig>(BufReader::new(file)) {
            return config;
        }
    }

    // Return default settings if file doesn't exist or has error
    HomedeckConfig::default()
}

pub fn save_cfg(config: &HomedeckConfig) -> Result<(), Box<dyn Error>> {
    let path = PATH_HOMEDECK.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: HomedeckConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.fullscreen);
        assert!(config.tile_labels.is_empty());
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = HomedeckConfig {
            fullscreen: true,
            tile_labels: vec!["Zelda".into(), "Mario Kart".into()],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: HomedeckConfig = serde_json::from_str(&json).unwrap();
        assert!(back.fullscreen);
        assert_eq!(back.tile_labels, config.tile_labels);
    }
}
