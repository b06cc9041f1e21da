// Within-region navigation logic (pure functions)

use crate::ui::focus::types::{FocusRegion, NavDirection, GRID_COLS};

/// Result of a directional move on the home screen
#[derive(Debug, Clone, PartialEq)]
pub enum HomeNav {
    /// Stay in the current region, move selection by delta
    MoveWithin { delta: i32 },
    /// Switch focus to the other region
    SwitchRegion(FocusRegion),
    /// No navigation (at boundary or blocked)
    None,
}

/// Navigate the tile grid / action bar pair
///
/// Returns the navigation result without mutating state (pure function).
/// Left/right always move linearly within the active region, so on the grid
/// they may cross row boundaries. Up on the grid's lower row jumps a full
/// row; down from anywhere on the grid drops focus to the bar.
pub fn navigate_home(region: FocusRegion, direction: NavDirection, grid_index: usize) -> HomeNav {
    match region {
        FocusRegion::Grid => match direction {
            NavDirection::Left => HomeNav::MoveWithin { delta: -1 },
            NavDirection::Right => HomeNav::MoveWithin { delta: 1 },
            NavDirection::Up => {
                if grid_index >= GRID_COLS {
                    HomeNav::MoveWithin {
                        delta: -(GRID_COLS as i32),
                    }
                } else {
                    HomeNav::None // Already on the top row
                }
            }
            NavDirection::Down => HomeNav::SwitchRegion(FocusRegion::Bar),
        },
        FocusRegion::Bar => match direction {
            NavDirection::Left => HomeNav::MoveWithin { delta: -1 },
            NavDirection::Right => HomeNav::MoveWithin { delta: 1 },
            NavDirection::Up => HomeNav::SwitchRegion(FocusRegion::Grid),
            NavDirection::Down => HomeNav::None, // Horizontal bar
        },
    }
}

/// Clamp an index after applying a delta
pub fn apply_index_delta(current: usize, delta: i32, len: usize) -> usize {
    if delta < 0 {
        current.saturating_sub((-delta) as usize)
    } else {
        (current + delta as usize).min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_left_right_move_linearly() {
        assert_eq!(
            navigate_home(FocusRegion::Grid, NavDirection::Left, 4),
            HomeNav::MoveWithin { delta: -1 }
        );
        assert_eq!(
            navigate_home(FocusRegion::Grid, NavDirection::Right, 3),
            HomeNav::MoveWithin { delta: 1 }
        );
    }

    #[test]
    fn test_grid_up_from_lower_row_jumps_a_row() {
        for idx in GRID_COLS..8 {
            assert_eq!(
                navigate_home(FocusRegion::Grid, NavDirection::Up, idx),
                HomeNav::MoveWithin { delta: -4 }
            );
        }
    }

    #[test]
    fn test_grid_up_from_top_row_is_blocked() {
        for idx in 0..GRID_COLS {
            assert_eq!(
                navigate_home(FocusRegion::Grid, NavDirection::Up, idx),
                HomeNav::None
            );
        }
    }

    #[test]
    fn test_grid_down_always_drops_to_bar() {
        for idx in 0..8 {
            assert_eq!(
                navigate_home(FocusRegion::Grid, NavDirection::Down, idx),
                HomeNav::SwitchRegion(FocusRegion::Bar)
            );
        }
    }

    #[test]
    fn test_bar_up_returns_to_grid() {
        assert_eq!(
            navigate_home(FocusRegion::Bar, NavDirection::Up, 0),
            HomeNav::SwitchRegion(FocusRegion::Grid)
        );
    }

    #[test]
    fn test_bar_down_is_blocked() {
        assert_eq!(
            navigate_home(FocusRegion::Bar, NavDirection::Down, 0),
            HomeNav::None
        );
    }

    #[test]
    fn test_apply_delta_clamps_at_both_ends() {
        assert_eq!(apply_index_delta(5, -1, 8), 4);
        assert_eq!(apply_index_delta(0, -1, 8), 0);
        assert_eq!(apply_index_delta(7, 1, 8), 7);
        assert_eq!(apply_index_delta(5, -4, 8), 1);
    }
}
