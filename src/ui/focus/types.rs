//! Focus and navigation types for the home menu

// =============================================================================
// Layout constants
// =============================================================================

/// Tiles per grid row
pub const GRID_COLS: usize = 4;
/// Total game tiles (two rows of four)
pub const TILE_COUNT: usize = 8;
/// Buttons in the bottom action bar
pub const BAR_COUNT: usize = 6;

// =============================================================================
// Navigation types
// =============================================================================

/// The two independently-indexed focus areas
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum FocusRegion {
    #[default]
    Grid, // Game tile grid
    Bar,  // Bottom action bar
}

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A navigation-relevant input, decoupled from the windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Direction(NavDirection),
    Quit,
}

/// Cursor position across both regions.
///
/// Each region keeps its own index; switching regions never resets or copies
/// them, so returning to a region lands on the element left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub region: FocusRegion,
    pub grid_index: usize,
    pub bar_index: usize,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            region: FocusRegion::Grid,
            grid_index: 0,
            bar_index: 0,
        }
    }
}

impl CursorState {
    /// True if the element at (region, index) is the highlighted one.
    ///
    /// Exactly one element across both regions satisfies this at any time.
    pub fn is_selected(&self, region: FocusRegion, index: usize) -> bool {
        if self.region != region {
            return false;
        }
        match region {
            FocusRegion::Grid => index == self.grid_index,
            FocusRegion::Bar => index == self.bar_index,
        }
    }

    /// Index active in the current region
    pub fn active_index(&self) -> usize {
        match self.region {
            FocusRegion::Grid => self.grid_index,
            FocusRegion::Bar => self.bar_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count(cursor: &CursorState) -> usize {
        let grid = (0..TILE_COUNT)
            .filter(|i| cursor.is_selected(FocusRegion::Grid, *i))
            .count();
        let bar = (0..BAR_COUNT)
            .filter(|i| cursor.is_selected(FocusRegion::Bar, *i))
            .count();
        grid + bar
    }

    #[test]
    fn test_initial_selection_is_first_tile() {
        let cursor = CursorState::default();
        assert!(cursor.is_selected(FocusRegion::Grid, 0));
        assert_eq!(selected_count(&cursor), 1);
    }

    #[test]
    fn test_exactly_one_selected_in_every_state() {
        for region in [FocusRegion::Grid, FocusRegion::Bar] {
            for grid_index in 0..TILE_COUNT {
                for bar_index in 0..BAR_COUNT {
                    let cursor = CursorState {
                        region,
                        grid_index,
                        bar_index,
                    };
                    assert_eq!(selected_count(&cursor), 1);
                }
            }
        }
    }

    #[test]
    fn test_active_index_follows_region() {
        let cursor = CursorState {
            region: FocusRegion::Bar,
            grid_index: 7,
            bar_index: 2,
        };
        assert_eq!(cursor.active_index(), 2);
        assert!(!cursor.is_selected(FocusRegion::Grid, 7));
    }
}
