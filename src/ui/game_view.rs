use crate::game::{GameState, PlayerColor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, piece_color};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: usize,
    message: &Option<String>,
    elapsed: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(9),     // Board
            Constraint::Length(3),  // Message + timer
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, cursor, chunks[1]);
    render_message(frame, message, elapsed, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Status line: whose placement is next and both budgets, or the winner
pub fn status_line(game_state: &GameState) -> Line<'static> {
    if let Some(winner) = game_state.winner() {
        return Line::from(Span::styled(
            format!("Game Over  |  {} wins", winner),
            Style::default()
                .fg(piece_color(winner))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let next = game_state.next_color();
    let mut spans = vec![Span::styled(
        format!("Next placement: {}", next),
        Style::default()
            .fg(piece_color(next))
            .add_modifier(Modifier::BOLD),
    )];
    for color in PlayerColor::ALL {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("{} left: {}", color, game_state.remaining_budget(color).max(0)),
            Style::default().fg(piece_color(color)),
        ));
    }
    Line::from(spans)
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let header = Paragraph::new(status_line(game_state))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Pion Duel"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, cursor: usize, area: Rect) {
    let lines = board_lines(game_state.board(), Some(cursor), game_state.selected());
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, elapsed: &str, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", elapsed)),
        );

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Arrows/hjkl: Move  |  Enter/Space: Click  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line_initial() {
        let state = GameState::initial();
        assert_eq!(
            plain(&status_line(&state)),
            "Next placement: Orange  |  Orange left: 12  |  Green left: 12"
        );
    }

    #[test]
    fn test_status_line_after_win() {
        let mut state = GameState::initial();
        state.on_cell_clicked(0).unwrap(); // Orange on 0
        state.on_cell_clicked(0).unwrap(); // select it
        state.on_cell_clicked(2).unwrap(); // jump over empty 1: only Orange remains
        assert_eq!(plain(&status_line(&state)), "Game Over  |  Orange wins");
    }
}
