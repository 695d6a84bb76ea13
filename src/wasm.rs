//! Browser bindings: human black against a computer-controlled white.

use wasm_bindgen::prelude::*;

use crate::ai::Strategy;
use crate::game::{Controller, GameConfig, GameInstance};

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `strategy` is `"random"` or `"greedy"`.
    #[wasm_bindgen(constructor)]
    pub fn new(strategy: &str) -> Result<WasmGame, JsValue> {
        let strategy: Strategy = strategy.parse().map_err(to_js_error)?;
        Ok(Self {
            inner: GameInstance::new(GameConfig {
                black: Controller::Human,
                white: Controller::Computer(strategy),
                seed: None,
            }),
        })
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        self.inner.reset();
        self.state()
    }

    pub fn place(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        self.inner.place(row, col).map_err(to_js_error)?;
        self.state()
    }

    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Result<JsValue, JsValue> {
        self.inner.computer_move().map_err(to_js_error)?;
        self.state()
    }

    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        self.inner.pass().map_err(to_js_error)?;
        self.state()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_state()).map_err(JsValue::from)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_result()).map_err(JsValue::from)
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
