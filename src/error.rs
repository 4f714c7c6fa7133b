/// Errors returned by board queries, the move engine and the game controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfRange { x: i32, y: i32 },

    #[error("cell index {0} is outside the board (0..64)")]
    IndexOutOfRange(usize),

    #[error("illegal move at ({x}, {y})")]
    InvalidMove { x: u8, y: u8 },

    #[error("cannot pass while a legal move is available")]
    PassNotAllowed,

    #[error("game is already over")]
    GameOver,

    #[error("no snapshot at history position {0}")]
    NoSuchSnapshot(usize),

    #[error("failed to parse board: {0}")]
    ParseBoard(String),
}
