use crate::game::{Board, PlayerColor, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Highlight behind a picked-up piece
pub const SELECTED_BG: Color = Color::Rgb(0x38, 0x9e, 0xf2);

pub fn piece_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Orange => Color::Rgb(0xff, 0x8c, 0x00),
        PlayerColor::Green => Color::Green,
    }
}

/// Build the framed board: a column header, five rows of cells, and the
/// bottom border. `cursor` is underlined, `selected` gets a blue background.
pub fn board_lines(board: &Board, cursor: Option<usize>, selected: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 3);

    let mut header = vec![Span::raw("   ")]; // Matches the "0 ║" row prefix
    for col in 0..COLS {
        header.push(Span::styled(
            format!(" {} ", col),
            Style::default().fg(Color::DarkGray),
        ));
    }
    header.push(Span::raw("  "));
    lines.push(Line::from(header));

    lines.push(Line::from("  ╔════════════════╗"));

    for row in 0..ROWS {
        let mut spans = vec![Span::raw(format!("{} ║", row))];
        for col in 0..COLS {
            let index = row * COLS + col;
            let (symbol, mut style) = match board.owner_of(index) {
                Some(color) => (" ● ", Style::default().fg(piece_color(color))),
                None => (" · ", Style::default().fg(Color::DarkGray)),
            };
            if selected == Some(index) {
                style = style.bg(SELECTED_BG);
            }
            if cursor == Some(index) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from("  ╚════════════════╝"));
    lines
}
