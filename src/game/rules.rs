use serde::{Deserialize, Serialize};

use super::board::{Board, COLS};
use super::player::PlayerColor;

/// Offsets of a one-cell orthogonal step on the 5-wide grid.
pub const STEP_OFFSETS: [i32; 4] = [-1, 1, -(COLS as i32), COLS as i32];
/// Offsets of a two-cell orthogonal jump.
pub const JUMP_OFFSETS: [i32; 4] = [-2, 2, -2 * COLS as i32, 2 * COLS as i32];

/// Rule options for a match. The defaults reproduce the classic game,
/// including its row wrap-around and its extra Green placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Pieces each color may place.
    pub placement_budget: i32,
    /// Block Green at zero remaining like Orange, instead of at -1.
    pub symmetric_budget: bool,
    /// Accept steps and jumps that cross a row edge (e.g. 4 -> 5).
    pub row_wrap: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            placement_budget: 12,
            symmetric_budget: false,
            row_wrap: true,
        }
    }
}

impl RulesConfig {
    /// Whether `color` may place another piece with `remaining` left.
    pub fn can_place(&self, color: PlayerColor, remaining: i32) -> bool {
        match color {
            PlayerColor::Orange => remaining > 0,
            PlayerColor::Green if self.symmetric_budget => remaining > 0,
            PlayerColor::Green => remaining >= 0,
        }
    }

    /// Classify the displacement from `from` to `to`.
    pub fn classify(&self, from: usize, to: usize) -> MoveKind {
        let delta = to as i32 - from as i32;
        let kind = if STEP_OFFSETS.contains(&delta) {
            MoveKind::Step
        } else if JUMP_OFFSETS.contains(&delta) {
            MoveKind::Jump {
                over: (from + to) / 2,
            }
        } else {
            return MoveKind::Unaligned;
        };

        // Vertical offsets stay in their column whenever both ends are on the
        // board, so only horizontal ones can wrap.
        if !self.row_wrap && delta.abs() < COLS as i32 {
            let (from_row, _) = Board::row_col(from);
            let (to_row, _) = Board::row_col(to);
            if from_row != to_row {
                return MoveKind::Unaligned;
            }
        }
        kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// One cell orthogonally.
    Step,
    /// Two cells orthogonally, passing over `over`.
    Jump { over: usize },
    /// Anything else; ignored by the engine.
    Unaligned,
}
