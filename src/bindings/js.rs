//! Bindings to the JS API.

use js_sys::JsString;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
extern "C" {
	/// `String(value)`.
	#[wasm_bindgen(catch, js_name = String)]
	pub(super) fn to_js_string(value: &JsValue) -> Result<JsString, JsValue>;
}
