//! Core game logic: the 5x5 board, player colors, move geometry, and the
//! click-driven rule engine that emits events for the presentation layer.

mod board;
mod event;
mod player;
mod rules;
mod state;

pub use board::{Board, BoardError, Cell, CELL_COUNT, COLS, ROWS};
pub use event::GameEvent;
pub use player::PlayerColor;
pub use rules::{MoveKind, RulesConfig, JUMP_OFFSETS, STEP_OFFSETS};
pub use state::{GameState, Phase};
