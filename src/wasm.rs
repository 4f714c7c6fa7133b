//! JavaScript bindings for the turn/history controller.
//!
//! Every action returns the fresh `GameState` so the UI can redraw from a
//! single value.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::types::MoveView;

#[wasm_bindgen(js_name = Game)]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen(js_class = Game)]
impl WasmGame {
    /// `config` may be `undefined`, `null` or a partial `GameConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(WasmGame {
            inner: Game::new(config),
        })
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves: Vec<MoveView> = self.inner.legal_moves().iter().map(MoveView::from).collect();
        to_js(&moves)
    }

    pub fn play(&mut self, x: i32, y: i32) -> Result<JsValue, JsError> {
        self.inner.play(x, y)?;
        self.state()
    }

    pub fn pass(&mut self) -> Result<JsValue, JsError> {
        self.inner.pass()?;
        self.state()
    }

    pub fn undo(&mut self) -> Result<JsValue, JsError> {
        self.inner.undo();
        self.state()
    }

    pub fn redo(&mut self) -> Result<JsValue, JsError> {
        self.inner.redo();
        self.state()
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, position: usize) -> Result<JsValue, JsError> {
        self.inner.jump_to(position)?;
        self.state()
    }

    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        self.inner.reset();
        self.state()
    }

    #[wasm_bindgen(getter, js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
