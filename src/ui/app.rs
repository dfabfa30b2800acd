use crate::config::AppConfig;
use crate::game::{GameEvent, GameState, RulesConfig, CELL_COUNT, COLS, ROWS};
use crate::prefs::PrefsStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use std::time::Duration;

use super::clock::MatchClock;

pub struct App {
    game_state: GameState,
    rules: RulesConfig,
    cursor: usize,
    clock: MatchClock,
    prefs: Option<PrefsStore>,
    tick: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let prefs = config
            .ui
            .remember_last_color
            .then(|| PrefsStore::new(config.ui.prefs_path.clone()));

        let message = prefs.as_ref().and_then(|store| match store.load() {
            Ok(p) => p
                .last_color
                .map(|color| format!("Last piece placed last time: {color}")),
            Err(e) => Some(format!("Warning: {e}")),
        });

        App {
            game_state: GameState::with_rules(config.rules.clone()),
            rules: config.rules.clone(),
            cursor: CELL_COUNT / 2, // Start in the middle
            clock: MatchClock::start(),
            prefs,
            tick: Duration::from_millis(config.ui.tick_ms),
            should_quit: false,
            message,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop. Each tick repaints, so the timer advances
    /// even without input.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let (row, col) = (self.cursor / COLS, self.cursor % COLS);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') if col > 0 => self.cursor -= 1,
            KeyCode::Right | KeyCode::Char('l') if col + 1 < COLS => self.cursor += 1,
            KeyCode::Up | KeyCode::Char('k') if row > 0 => self.cursor -= COLS,
            KeyCode::Down | KeyCode::Char('j') if row + 1 < ROWS => self.cursor += COLS,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click(self.cursor);
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::with_rules(self.rules.clone());
                self.clock = MatchClock::start();
                self.cursor = CELL_COUNT / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Forward a click on `index` to the rule engine and react to its events
    fn click(&mut self, index: usize) {
        if self.game_state.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let events = match self.game_state.on_cell_clicked(index) {
            Ok(events) => events,
            Err(e) => {
                self.message = Some(format!("Error: {e}"));
                return;
            }
        };

        if events.is_empty()
            && !self.game_state.is_occupied(index)
            && self.game_state.selected().is_none()
            && !self.game_state.can_place()
        {
            self.message = Some(format!(
                "{} has no pieces left to place",
                self.game_state.next_color()
            ));
        }

        for event in &events {
            match *event {
                GameEvent::PiecePlaced { color, .. } => {
                    if let Some(store) = &self.prefs {
                        if let Err(e) = store.remember_last_color(color) {
                            self.message = Some(format!("Warning: {e}"));
                            continue;
                        }
                    }
                    self.message = Some(event.describe());
                }
                GameEvent::GameWon(_) => {
                    self.clock.stop();
                    self.message = Some(format!("{} Press 'r' to restart.", event.describe()));
                }
                GameEvent::PieceCaptured(_) | GameEvent::PieceMoved { .. } => {
                    self.message = Some(event.describe());
                }
                GameEvent::PieceSelected(_) | GameEvent::PieceDeselected(_) => {}
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            &self.message,
            &self.clock.display(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerColor;
    use crossterm::event::KeyModifiers;

    fn app_without_prefs() -> App {
        let mut config = AppConfig::default();
        config.ui.remember_last_color = false;
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = app_without_prefs();
        assert_eq!(app.cursor, 12);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('l'));
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.cursor, 24);
    }

    #[test]
    fn test_enter_places_piece() {
        let mut app = app_without_prefs();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().owner_of(12), Some(PlayerColor::Orange));
        assert_eq!(app.message.as_deref(), Some("Orange placed on cell 12"));
    }

    #[test]
    fn test_win_stops_clock_and_blocks_clicks() {
        let mut app = app_without_prefs();
        app.click(12); // Orange placed
        app.click(12); // selected
        app.click(14); // jump attempt leaves only Orange on the board
        assert_eq!(app.game_state().winner(), Some(PlayerColor::Orange));
        assert!(!app.clock.is_running());

        app.click(0);
        assert!(!app.game_state().is_occupied(0));
        assert_eq!(app.message.as_deref(), Some("Game over! Press 'r' to restart."));
    }

    #[test]
    fn test_restart_resets_state() {
        let mut app = app_without_prefs();
        app.click(3);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().board().occupied_count(), 0);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = app_without_prefs();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_exhausted_budget_reported() {
        let mut config = AppConfig::default();
        config.ui.remember_last_color = false;
        config.rules.placement_budget = 1;
        let mut app = App::new(&config);
        app.click(0); // Orange
        app.click(1); // Green
        app.click(2); // Orange is out
        assert!(!app.game_state().is_occupied(2));
        assert_eq!(
            app.message.as_deref(),
            Some("Orange has no pieces left to place")
        );
    }

    #[test]
    fn test_placement_remembers_color() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.ui.prefs_path = dir.path().join("prefs.json");
        let mut app = App::new(&config);
        assert_eq!(app.message, None);

        app.click(0);
        app.click(1);
        let store = PrefsStore::new(config.ui.prefs_path.clone());
        assert_eq!(store.load().unwrap().last_color, Some(PlayerColor::Green));

        let app = App::new(&config);
        assert_eq!(
            app.message.as_deref(),
            Some("Last piece placed last time: Green")
        );
    }
}
