#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use othello::wasm::WasmGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn wasm_ready_is_true() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn unknown_strategy_is_rejected() {
    assert!(WasmGame::new("minimax").is_err());
}

#[wasm_bindgen_test]
fn human_move_then_computer_reply() {
    let mut game = WasmGame::new("greedy").unwrap();

    let state = game.place(2, 4).unwrap();
    assert_eq!(field(&state, "current_player").as_string().unwrap(), "white");
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));

    let state = game.computer_move().unwrap();
    assert_eq!(field(&state, "current_player").as_string().unwrap(), "black");
    assert_eq!(field(&state, "is_pass").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn illegal_move_surfaces_as_error_string() {
    let mut game = WasmGame::new("random").unwrap();

    let err = game.place(0, 0).unwrap_err();
    assert!(err.as_string().unwrap().contains("cannot be placed"));
}
