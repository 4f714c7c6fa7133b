use serde::Serialize;

use crate::engine::MoveCandidate;

/// A legal move as handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveView {
    pub x: u8,
    pub y: u8,
    /// Board indices (0..=63) this move would flip.
    pub flips: Vec<u8>,
}

impl From<&MoveCandidate> for MoveView {
    fn from(mv: &MoveCandidate) -> Self {
        MoveView {
            x: mv.coord().x(),
            y: mv.coord().y(),
            flips: mv.vulnerable().iter().map(|&i| i as u8).collect(),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells, 0=empty, 1=black, 2=white, index `x + y * 8`.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub legal_moves: Vec<MoveView>,
    pub is_game_over: bool,
    pub can_pass: bool,
    pub cursor: usize,
    pub history_len: usize,
    /// Contract:
    /// - `true` when the snapshot under the cursor was produced by a pass.
    /// - `false` for a normal move and for the opening position.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions (0..=63).
    /// - Pass and opening position: empty list.
    pub flipped: Vec<u8>,
    /// Index of the stone placed to reach this snapshot, if any.
    pub last_move: Option<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 1=black, 2=white, 0=draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
