use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Orange,
    Green,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 2] = [PlayerColor::Orange, PlayerColor::Green];

    /// Get the opposing color
    pub fn other(self) -> PlayerColor {
        match self {
            PlayerColor::Orange => PlayerColor::Green,
            PlayerColor::Green => PlayerColor::Orange,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Orange => "Orange",
            PlayerColor::Green => "Green",
        }
    }

    /// Single-character glyph used by text renderings of the board
    pub fn glyph(self) -> char {
        match self {
            PlayerColor::Orange => 'O',
            PlayerColor::Green => 'G',
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            PlayerColor::Orange => 0,
            PlayerColor::Green => 1,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
