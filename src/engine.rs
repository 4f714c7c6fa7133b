//! Move generation and board mutation.
//!
//! Every function here is a pure function of its arguments.

use tracing::instrument;

use crate::board::{BOARD_SIZE, Board, Cell, Coord, in_bounds};
use crate::error::GameError;
use crate::player::Player;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A playable coordinate together with the opponent stones it would flip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    coord: Coord,
    vulnerable: Vec<usize>,
}

impl MoveCandidate {
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Indices that flip when this move is played, ascending.
    pub fn vulnerable(&self) -> &[usize] {
        &self.vulnerable
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Derived game status for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningStatus {
    pub game_ended: bool,
    /// `None` while the game is still undetermined.
    pub result: Option<Outcome>,
}

/// Lists legal moves for `player` in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<MoveCandidate> {
    let mut moves = Vec::new();
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            let coord = Coord { x, y };
            let vulnerable = vulnerable_cells(board, coord, player);
            if !vulnerable.is_empty() {
                moves.push(MoveCandidate { coord, vulnerable });
            }
        }
    }
    moves
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    (0..BOARD_SIZE as u8)
        .flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Coord { x, y }))
        .any(|coord| !vulnerable_cells(board, coord, player).is_empty())
}

/// Opponent stones `player` would flip by playing at `coord`.
/// Empty when the cell is occupied or nothing is bracketed.
pub fn vulnerable_cells(board: &Board, coord: Coord, player: Player) -> Vec<usize> {
    if board.get(coord) != Cell::Empty {
        return Vec::new();
    }

    let me = player.cell();
    let opp = player.opponent().cell();
    let mut flips = Vec::new();

    for (dx, dy) in DIRECTIONS {
        let mut x = coord.x as i32 + dx;
        let mut y = coord.y as i32 + dy;
        let mut line = Vec::new();

        while in_bounds(x, y) {
            let here = Coord {
                x: x as u8,
                y: y as u8,
            };
            let cell = board.get(here);
            if cell == opp {
                line.push(here.index());
            } else {
                if cell == me {
                    flips.extend_from_slice(&line);
                }
                break;
            }

            x += dx;
            y += dy;
        }
    }

    flips.sort_unstable();
    flips
}

/// Places the stone and flips every vulnerable cell. Returns the new board.
///
/// The candidate must be one `legal_moves` yields for this board and player;
/// a candidate taken from another position is rejected.
#[instrument(level = "trace", skip(board), fields(x = mv.coord.x, y = mv.coord.y))]
pub fn apply_move(board: &Board, mv: &MoveCandidate, player: Player) -> Result<Board, GameError> {
    let Coord { x, y } = mv.coord;
    if mv.vulnerable.is_empty() || vulnerable_cells(board, mv.coord, player) != mv.vulnerable {
        return Err(GameError::InvalidMove { x, y });
    }

    let stone = player.cell();
    let changes = std::iter::once(mv.coord.index())
        .chain(mv.vulnerable.iter().copied())
        .map(|index| (index, stone));
    board.with_stones(changes)
}

/// True when the board is full or neither side can move.
pub fn is_terminal(board: &Board, player: Player) -> bool {
    board.is_full() || (!has_legal_move(board, player) && !has_legal_move(board, player.opponent()))
}

/// More stones wins; equal counts draw.
pub fn judge_winner(board: &Board) -> Outcome {
    let (black, white) = board.score();
    if black > white {
        Outcome::Winner(Player::Black)
    } else if white > black {
        Outcome::Winner(Player::White)
    } else {
        Outcome::Draw
    }
}

pub fn next_player(player: Player) -> Player {
    player.opponent()
}

pub fn winning_status(board: &Board, player: Player) -> WinningStatus {
    if is_terminal(board, player) {
        WinningStatus {
            game_ended: true,
            result: Some(judge_winner(board)),
        }
    } else {
        WinningStatus {
            game_ended: false,
            result: None,
        }
    }
}
