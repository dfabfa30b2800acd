use super::player::PlayerColor;

/// What a click changed, in the order the changes happened. The
/// presentation layer renders from these; an empty list means the click
/// was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceSelected(usize),
    PieceDeselected(usize),
    PiecePlaced { index: usize, color: PlayerColor },
    PieceMoved { from: usize, to: usize },
    PieceCaptured(usize),
    GameWon(PlayerColor),
}

impl GameEvent {
    /// Short human-readable description for status lines and logs
    pub fn describe(&self) -> String {
        match *self {
            GameEvent::PieceSelected(i) => format!("Selected piece on cell {i}"),
            GameEvent::PieceDeselected(i) => format!("Released piece on cell {i}"),
            GameEvent::PiecePlaced { index, color } => {
                format!("{color} placed on cell {index}")
            }
            GameEvent::PieceMoved { from, to } => format!("Moved {from} -> {to}"),
            GameEvent::PieceCaptured(i) => format!("Captured piece on cell {i}"),
            GameEvent::GameWon(color) => format!("{color} wins!"),
        }
    }
}
