use super::board::BoardError;
use super::rules::MoveKind;
use super::{Board, GameEvent, PlayerColor, RulesConfig};

/// Where the current turn cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoSelection,
    Selected(usize),
}

/// One match: the board plus everything the rules track about it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    rules: RulesConfig,
    selected: Option<usize>,
    next_color: PlayerColor,
    remaining: [i32; 2],
    outcome: Option<PlayerColor>,
}

impl GameState {
    /// Create initial game state with the classic rules
    pub fn initial() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        let budget = rules.placement_budget;
        GameState {
            board: Board::new(),
            rules,
            selected: None,
            next_color: PlayerColor::Orange, // Orange places first
            remaining: [budget; 2],
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.board.is_occupied(index)
    }

    pub fn owner_of(&self, index: usize) -> Option<PlayerColor> {
        self.board.owner_of(index)
    }

    /// Placements left for `color`. Green can go down to -1.
    pub fn remaining_budget(&self, color: PlayerColor) -> i32 {
        self.remaining[color.slot()]
    }

    /// Color the next placement will use
    pub fn next_color(&self) -> PlayerColor {
        self.next_color
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(index) => Phase::Selected(index),
            None => Phase::NoSelection,
        }
    }

    /// Winner, once a capture attempt has left a single color on the board
    pub fn winner(&self) -> Option<PlayerColor> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether the next placement click would put a piece down
    pub fn can_place(&self) -> bool {
        self.rules
            .can_place(self.next_color, self.remaining_budget(self.next_color))
    }

    /// React to a click on `index`. Returns the resulting events, empty when
    /// the click is ignored. Errors only for indices off the board.
    pub fn on_cell_clicked(&mut self, index: usize) -> Result<Vec<GameEvent>, BoardError> {
        let cell = self.board.cell_at(index)?;
        let mut events = Vec::new();

        if self.is_over() {
            return Ok(events);
        }

        match (cell.occupant, self.selected) {
            (None, None) => self.place(index, &mut events)?,
            (None, Some(from)) => self.move_or_capture(from, index, &mut events)?,
            (Some(_), None) => {
                self.selected = Some(index);
                events.push(GameEvent::PieceSelected(index));
            }
            (Some(_), Some(selected)) if selected == index => {
                self.selected = None;
                events.push(GameEvent::PieceDeselected(index));
            }
            // Only one selection is tracked; another piece is ignored
            (Some(_), Some(_)) => {}
        }

        Ok(events)
    }

    fn place(&mut self, index: usize, events: &mut Vec<GameEvent>) -> Result<(), BoardError> {
        let color = self.next_color;
        if !self.can_place() {
            return Ok(());
        }

        self.board.place(index, color)?;
        self.remaining[color.slot()] -= 1;
        self.next_color = color.other();
        events.push(GameEvent::PiecePlaced { index, color });
        Ok(())
    }

    fn move_or_capture(
        &mut self,
        from: usize,
        to: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), BoardError> {
        match self.rules.classify(from, to) {
            MoveKind::Step => self.relocate(from, to, events),
            MoveKind::Jump { over } => {
                let mover = self.board.owner_of(from).ok_or(BoardError::SourceEmpty(from))?;
                if self.board.owner_of(over) == Some(mover.other()) {
                    self.board.remove(over)?;
                    events.push(GameEvent::PieceCaptured(over));
                    self.relocate(from, to, events)?;
                }
                // Checked after every jump attempt, landed or not
                self.verify(events);
                Ok(())
            }
            MoveKind::Unaligned => Ok(()),
        }
    }

    fn relocate(
        &mut self,
        from: usize,
        to: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), BoardError> {
        self.board.move_occupant(from, to)?;
        self.selected = None;
        events.push(GameEvent::PieceDeselected(from));
        events.push(GameEvent::PieceMoved { from, to });
        Ok(())
    }

    /// Record a winner if one color owns every piece on the board
    fn verify(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(color) = self.board.sole_owner() {
            self.outcome = Some(color);
            events.push(GameEvent::GameWon(color));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
