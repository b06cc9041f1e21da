// Main input handling entry point
//
// This module orchestrates navigation input processing using pure functions.
// It stays decoupled from the rendering toolkit so the whole state machine
// can be driven from tests.

use crate::ui::focus::pure::{apply_index_delta, navigate_home, HomeNav};
use crate::ui::focus::types::{CursorState, FocusRegion, NavDirection, BAR_COUNT, TILE_COUNT};

/// State snapshot needed for navigation decisions
pub struct NavContext {
    pub region: FocusRegion,
    pub grid_index: usize,
    pub bar_index: usize,
}

impl NavContext {
    pub fn from_cursor(cursor: &CursorState) -> Self {
        Self {
            region: cursor.region,
            grid_index: cursor.grid_index,
            bar_index: cursor.bar_index,
        }
    }
}

/// Result of handling a navigation input
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// No action needed
    None,
    /// Switch the focused region
    SetRegion(FocusRegion),
    /// Update the grid selection
    SetGridIndex(usize),
    /// Update the action bar selection
    SetBarIndex(usize),
}

/// Process directional navigation input
pub fn handle_direction(ctx: &NavContext, direction: NavDirection) -> Vec<NavAction> {
    match navigate_home(ctx.region, direction, ctx.grid_index) {
        HomeNav::SwitchRegion(region) => vec![NavAction::SetRegion(region)],
        HomeNav::MoveWithin { delta } => match ctx.region {
            FocusRegion::Grid => {
                let new_idx = apply_index_delta(ctx.grid_index, delta, TILE_COUNT);
                vec![NavAction::SetGridIndex(new_idx)]
            }
            FocusRegion::Bar => {
                let new_idx = apply_index_delta(ctx.bar_index, delta, BAR_COUNT);
                vec![NavAction::SetBarIndex(new_idx)]
            }
        },
        HomeNav::None => vec![NavAction::None],
    }
}

/// Fold navigation actions back into the cursor
pub fn apply_actions(cursor: &mut CursorState, actions: &[NavAction]) {
    for action in actions {
        match action {
            NavAction::None => {}
            NavAction::SetRegion(region) => cursor.region = *region,
            NavAction::SetGridIndex(idx) => cursor.grid_index = *idx,
            NavAction::SetBarIndex(idx) => cursor.bar_index = *idx,
        }
    }
}
