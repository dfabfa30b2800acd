//! # Pion Duel
//!
//! Rules engine for a two-player game on a 5x5 grid: each side places up to
//! twelve pieces, moves them one cell orthogonally, and captures by jumping
//! over an adjacent enemy piece. A player wins when only their pieces remain.
//! Ships with a Ratatui terminal front end and a headless script runner.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, colors, move geometry, rule engine
//! - [`ui`]: Terminal UI: board view, match clock
//! - [`config`]: TOML configuration loading and validation
//! - [`prefs`]: Cosmetic preferences persisted between runs
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod prefs;
pub mod ui;
