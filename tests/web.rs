#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use othello::wasm::WasmGame;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn ready_probe() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn new_game_exposes_opening_state() {
    let game = ok(WasmGame::new(JsValue::UNDEFINED));
    let state = ok(game.state());

    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
    assert_eq!(Array::from(&ok(game.legal_moves())).length(), 4);
}

#[wasm_bindgen_test]
fn play_undo_round_trip_through_js() {
    let mut game = ok(WasmGame::new(JsValue::NULL));

    let state = ok(game.play(2, 3));
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "last_move").as_f64(), Some(26.0));

    let state = ok(game.undo());
    assert_eq!(field(&state, "cursor").as_f64(), Some(0.0));
    assert_eq!(field(&state, "history_len").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn illegal_move_surfaces_as_error() {
    let mut game = ok(WasmGame::new(JsValue::UNDEFINED));

    assert!(game.play(0, 0).is_err());
    assert!(game.pass().is_err());
}

#[wasm_bindgen_test]
fn config_object_selects_restart_policy() {
    let config = js_sys::Object::new();
    Reflect::set(
        &config,
        &JsValue::from_str("restart"),
        &JsValue::from_str("discard_history"),
    )
    .unwrap();
    let mut game = ok(WasmGame::new(config.into()));

    ok(game.play(2, 3));
    let state = ok(game.reset());
    assert_eq!(field(&state, "history_len").as_f64(), Some(1.0));
}
