#![cfg(all(test, target_family = "wasm"))]

mod util;

use std::cell::RefCell;
use std::rc::Rc;

use appearin_embed::AppearIn;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::wasm_bindgen_test;

use self::util::{attach, document, error_message, error_name, src};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_parameters() {
	let appear_in = AppearIn::new(JsValue::UNDEFINED);

	let error = appear_in
		.add_room_to_iframe(JsValue::UNDEFINED, JsValue::UNDEFINED)
		.unwrap_err();

	assert_eq!(error_name(&error), "MissingParameterError");
	assert_eq!(
		error_message(&error),
		"missing parameters or was passed as undefined"
	);

	let error = appear_in
		.add_room_to_element_by_id(JsValue::NULL, JsValue::from_str("room"))
		.unwrap_err();
	assert_eq!(error_name(&error), "MissingParameterError");
}

#[wasm_bindgen_test]
fn invalid_element() {
	let appear_in = AppearIn::new(JsValue::UNDEFINED);
	let div = document().create_element("div").unwrap();

	let error = appear_in
		.add_room_to_iframe(div.into(), JsValue::from_str("room"))
		.unwrap_err();
	assert_eq!(error_name(&error), "InvalidElementError");
	assert_eq!(error_message(&error), "this is not an iframe element");

	let error = appear_in
		.add_room_to_iframe(JsValue::from_f64(1.), JsValue::from_str("room"))
		.unwrap_err();
	assert_eq!(error_name(&error), "InvalidElementError");
}

#[wasm_bindgen_test]
fn iframe() {
	let appear_in = AppearIn::new(JsValue::UNDEFINED);
	let iframe = document().create_element("iframe").unwrap();

	appear_in
		.add_room_to_iframe(iframe.clone().into(), JsValue::from_str("/AnyRoomName"))
		.unwrap();
	assert_eq!(
		src(&iframe).as_deref(),
		Some("https://appear.in/anyroomname")
	);

	appear_in
		.add_room_to_iframe(iframe.clone().into(), JsValue::from_f64(42.))
		.unwrap();
	assert_eq!(src(&iframe).as_deref(), Some("https://appear.in/42"));
}

#[wasm_bindgen_test]
fn element_by_id() {
	let appear_in = AppearIn::new(JsValue::UNDEFINED);
	let iframe = attach("iframe", "bindings-element-by-id");

	appear_in
		.add_room_to_element_by_id(
			JsValue::from_str("bindings-element-by-id"),
			JsValue::from_str("any-room"),
		)
		.unwrap();
	assert_eq!(
		src(&iframe.0).as_deref(),
		Some("https://appear.in/any-room")
	);

	let error = appear_in
		.add_room_to_element_by_id(JsValue::from_str("missing-id"), JsValue::from_str("room"))
		.unwrap_err();
	assert_eq!(error_name(&error), "ElementNotFoundError");
	assert!(error_message(&error).contains("missing-id"));
}

#[wasm_bindgen_test]
fn options() {
	let options = Object::new();
	Reflect::set(&options, &"debug".into(), &JsValue::TRUE).unwrap();
	Reflect::set(&options, &"baseUrl".into(), &"https://rooms.example.com".into()).unwrap();

	let appear_in = AppearIn::new(options.into());
	let iframe = document().create_element("iframe").unwrap();

	appear_in
		.add_room_to_iframe(iframe.clone().into(), JsValue::from_str("room"))
		.unwrap();
	assert_eq!(
		src(&iframe).as_deref(),
		Some("https://rooms.example.com/room")
	);
}

#[wasm_bindgen_test]
fn normalize() {
	assert_eq!(
		appearin_embed::normalize_room_name(JsValue::from_str("/HELLOword")).unwrap(),
		"/helloword"
	);
	assert_eq!(
		appearin_embed::normalize_room_name(JsValue::UNDEFINED).unwrap(),
		""
	);

	let error = appearin_embed::normalize_room_name(JsValue::from_str("robots.txt")).unwrap_err();
	assert_eq!(error_name(&error), "ReservedNameError");
	assert_eq!(
		error_message(&error),
		"this name is reserved; choose another room name."
	);

	assert!(appearin_embed::room_name_requirements().contains("templates"));
}

#[wasm_bindgen_test]
async fn random_room_name_promise() {
	let appear_in = AppearIn::new(JsValue::UNDEFINED);

	let name = JsFuture::from(appear_in.get_random_room_name(None))
		.await
		.unwrap()
		.as_string()
		.unwrap();

	assert!(name.starts_with('/'), "{name}");
}

#[wasm_bindgen_test]
async fn random_room_name_callback() {
	let appear_in = AppearIn::new(JsValue::UNDEFINED);
	let called = Rc::new(RefCell::new(None));

	let callback = Closure::<dyn FnMut(JsValue)>::new({
		let called = Rc::clone(&called);
		move |name: JsValue| *called.borrow_mut() = name.as_string()
	});
	let promise: Promise =
		appear_in.get_random_room_name(Some(callback.as_ref().unchecked_ref::<Function>().clone()));

	let name = JsFuture::from(promise).await.unwrap().as_string().unwrap();

	assert_eq!(called.borrow().as_deref(), Some(name.as_str()));
}

#[wasm_bindgen_test]
async fn random_room_name_rejects() {
	let options = Object::new();
	Reflect::set(
		&options,
		&"randomRoomNameUrl".into(),
		&"http://127.0.0.1:1/random-room-name".into(),
	)
	.unwrap();
	let appear_in = AppearIn::new(options.into());

	let error = JsFuture::from(appear_in.get_random_room_name(None))
		.await
		.unwrap_err();

	assert_eq!(error_name(&error), "RandomRoomNameError");
}

#[wasm_bindgen_test]
async fn random_room_name_remote() {
	let options = Object::new();
	Reflect::set(
		&options,
		&"randomRoomNameUrl".into(),
		&format!(
			"data:application/json,{}",
			String::from(js_sys::encode_uri_component(r#"{"roomName":"Foo/"}"#))
		)
		.into(),
	)
	.unwrap();
	let appear_in = AppearIn::new(options.into());

	let name = JsFuture::from(appear_in.get_random_room_name(None))
		.await
		.unwrap()
		.as_string()
		.unwrap();

	assert_eq!(name, "/foo");
}
