#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Returns the [`Document`] of the test page.
pub fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Appends a new `<tag id=id>` to the body.
///
/// Removed again when the returned [`Attached`] is dropped.
pub fn attach(tag: &str, id: &str) -> Attached {
	let document = document();
	let element = document.create_element(tag).unwrap();
	element.set_id(id);
	let body: HtmlElement = document.body().unwrap();
	body.append_child(&element).unwrap();

	Attached(element)
}

/// Element attached to the document body.
pub struct Attached(pub Element);

impl Drop for Attached {
	fn drop(&mut self) {
		self.0.remove();
	}
}

/// Returns the `src` attribute of `element`.
pub fn src(element: &Element) -> Option<String> {
	element.get_attribute("src")
}

/// Returns the `name` of a JS error.
pub fn error_name(error: &wasm_bindgen::JsValue) -> String {
	error.unchecked_ref::<js_sys::Error>().name().into()
}

/// Returns the `message` of a JS error.
pub fn error_message(error: &wasm_bindgen::JsValue) -> String {
	error.unchecked_ref::<js_sys::Error>().message().into()
}
