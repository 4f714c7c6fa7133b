use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod player;
pub mod types;
pub mod wasm;

pub use board::{Board, Cell, Coord};
pub use config::{GameConfig, RestartPolicy};
pub use engine::{MoveCandidate, Outcome, WinningStatus};
pub use error::GameError;
pub use game::{Action, Game, Snapshot};
pub use player::Player;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
