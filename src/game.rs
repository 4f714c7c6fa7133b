use tracing::{debug, instrument, warn};

use crate::board::{Board, Coord};
use crate::config::{GameConfig, RestartPolicy};
use crate::engine::{self, MoveCandidate, Outcome, WinningStatus};
use crate::error::GameError;
use crate::player::Player;
use crate::types::{GameResult, GameState, MoveView};

/// How a snapshot was reached from the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Place { coord: Coord, flipped: Vec<usize> },
    Pass,
}

/// One entry of the move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    /// `None` for the opening position.
    pub action: Option<Action>,
}

/// Turn and history controller.
///
/// Holds a linear history of board snapshots plus a cursor. Every play or
/// pass appends one snapshot, so the side to move is derived from the
/// cursor: black on even positions, white on odd ones.
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Snapshot>,
    cursor: usize,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            history: vec![opening()],
            cursor: 0,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.snapshot().board
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        engine::legal_moves(self.board(), self.current_player())
    }

    pub fn status(&self) -> WinningStatus {
        engine::winning_status(self.board(), self.current_player())
    }

    pub fn is_game_over(&self) -> bool {
        engine::is_terminal(self.board(), self.current_player())
    }

    /// A pass is offered only when the side to move is stuck but the game
    /// goes on.
    pub fn can_pass(&self) -> bool {
        !self.is_game_over() && !engine::has_legal_move(self.board(), self.current_player())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Returns `(black_count, white_count)` for the current snapshot.
    pub fn score(&self) -> (usize, usize) {
        self.board().score()
    }

    /// Plays the current player's stone at `(x, y)`.
    ///
    /// Snapshots after the cursor are discarded before the new one is
    /// appended.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        let coord = Coord::new(x, y)?;
        if self.is_game_over() {
            warn!("move rejected, game is over");
            return Err(GameError::GameOver);
        }

        let player = self.current_player();
        let mv = self
            .legal_moves()
            .into_iter()
            .find(|m| m.coord() == coord)
            .ok_or_else(|| {
                warn!(player = player.name(), "illegal move");
                GameError::InvalidMove {
                    x: coord.x,
                    y: coord.y,
                }
            })?;

        let board = engine::apply_move(self.board(), &mv, player)?;
        debug!(
            player = player.name(),
            flipped = mv.vulnerable().len(),
            "stone placed"
        );
        self.push(Snapshot {
            board,
            action: Some(Action::Place {
                coord,
                flipped: mv.vulnerable().to_vec(),
            }),
        });
        Ok(())
    }

    /// Skips the current player's turn without touching the board.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            warn!("pass rejected, game is over");
            return Err(GameError::GameOver);
        }
        if engine::has_legal_move(self.board(), self.current_player()) {
            warn!("pass rejected, a legal move exists");
            return Err(GameError::PassNotAllowed);
        }

        debug!(player = self.current_player().name(), "pass");
        let board = *self.board();
        self.push(Snapshot {
            board,
            action: Some(Action::Pass),
        });
        Ok(())
    }

    /// Steps back one snapshot. Returns `false` at the opening position.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps forward to a snapshot left behind by `undo`.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves the cursor to any recorded snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, position: usize) -> Result<(), GameError> {
        if position >= self.history.len() {
            return Err(GameError::NoSuchSnapshot(position));
        }
        self.cursor = position;
        Ok(())
    }

    /// Returns to the opening position according to the restart policy.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn reset(&mut self) {
        self.cursor = 0;
        if self.config.restart == RestartPolicy::DiscardHistory {
            self.history.truncate(1);
        }
        debug!(history_len = self.history.len(), "reset");
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.score();
        let snapshot = self.snapshot();
        let (is_pass, flipped, last_move) = match &snapshot.action {
            Some(Action::Place { coord, flipped }) => (
                false,
                flipped.iter().map(|&i| i as u8).collect(),
                Some(coord.index() as u8),
            ),
            Some(Action::Pass) => (true, Vec::new(), None),
            None => (false, Vec::new(), None),
        };

        GameState {
            board: self.board().to_array().to_vec(),
            current_player: self.current_player().code(),
            black_count: black_count as u8,
            white_count: white_count as u8,
            legal_moves: self.legal_moves().iter().map(MoveView::from).collect(),
            is_game_over: self.is_game_over(),
            can_pass: self.can_pass(),
            cursor: self.cursor,
            history_len: self.history.len(),
            is_pass,
            flipped,
            last_move,
        }
    }

    /// Score-based result of the current snapshot. Meaningful once the game
    /// is over, but available at any time for a provisional tally.
    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.score();
        GameResult {
            winner: match engine::judge_winner(self.board()) {
                Outcome::Winner(player) => player.code(),
                Outcome::Draw => 0,
            },
            black_count: black_count as u8,
            white_count: white_count as u8,
        }
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.history.truncate(self.cursor + 1);
        self.history.push(snapshot);
        self.cursor = self.history.len() - 1;
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.history = vec![Snapshot {
            board,
            action: None,
        }];
        self.cursor = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn opening() -> Snapshot {
    Snapshot {
        board: Board::initial(),
        action: None,
    }
}
