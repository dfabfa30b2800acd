//! Terminal UI: a cursor-driven board that forwards cell clicks to the rule
//! engine, plus the match timer.

mod app;
pub mod board_widget;
mod clock;
mod game_view;

pub use app::App;
pub use clock::{format_elapsed, MatchClock};
pub use game_view::status_line;
