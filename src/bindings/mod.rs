//! JavaScript interface, mirroring the camelCase API of the hosted widget.

mod js;

use js_sys::{Function, Promise, Reflect};
use log::Level;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::{Config, RoomNameSource};
use crate::{room, EmbedController, EmbedError};

/// `AppearIn` class exported to JS.
///
/// Arguments are taken as raw [`JsValue`]s so that `undefined` and `null`
/// can be reported as [`EmbedError::MissingParameter`].
#[derive(Debug)]
#[wasm_bindgen]
pub struct AppearIn {
	/// Controller all calls are forwarded to.
	controller: EmbedController,
}

#[wasm_bindgen]
impl AppearIn {
	/// `new AppearIn({ debug, baseUrl, randomRoomNameUrl })`, all options are
	/// optional.
	#[wasm_bindgen(constructor)]
	#[must_use]
	pub fn new(options: JsValue) -> Self {
		let config = config_from_options(&options);

		if config.is_debug() {
			// Fails if a logger is already installed, which keeps that one.
			let _ = console_log::init_with_level(Level::Debug);
		}

		Self {
			controller: EmbedController::new(config),
		}
	}

	/// See [`EmbedController::is_web_rtc_compatible()`].
	#[wasm_bindgen(js_name = isWebRtcCompatible)]
	#[must_use]
	pub fn is_web_rtc_compatible(&self) -> bool {
		self.controller.is_web_rtc_compatible()
	}

	/// See [`EmbedController::random_room_name_with()`].
	///
	/// `callback`, if any, is called with the name before the returned
	/// [`Promise`] resolves.
	#[wasm_bindgen(js_name = getRandomRoomName)]
	pub fn get_random_room_name(&self, callback: Option<Function>) -> Promise {
		let future = self.controller.random_room_name_with(move |name: &str| {
			if let Some(callback) = callback {
				if let Err(error) = callback.call1(&JsValue::NULL, &JsValue::from_str(name)) {
					log::warn!("room name callback threw: {error:?}");
				}
			}
		});

		wasm_bindgen_futures::future_to_promise(async move {
			future
				.await
				.map(|name| JsValue::from_str(&name))
				.map_err(JsValue::from)
		})
	}

	/// See [`EmbedController::add_room_to_iframe()`].
	///
	/// # Errors
	///
	/// A JS `Error` named after the [`EmbedError`] kind.
	#[wasm_bindgen(js_name = addRoomToIframe)]
	pub fn add_room_to_iframe(&self, element: JsValue, room_name: JsValue) -> Result<(), JsValue> {
		let (Some(element), Some(room_name)) = (present(element), present(room_name)) else {
			return Err(EmbedError::MissingParameter.into());
		};

		let element: Element = element
			.dyn_into()
			.map_err(|_| JsValue::from(EmbedError::InvalidElement))?;
		let room_name = coerce_to_string(&room_name)?;

		self.controller
			.add_room_to_iframe(Some(&element), Some(&room_name))
			.map_err(JsValue::from)
	}

	/// See [`EmbedController::add_room_to_element_by_id()`].
	///
	/// # Errors
	///
	/// A JS `Error` named after the [`EmbedError`] kind.
	#[wasm_bindgen(js_name = addRoomToElementById)]
	pub fn add_room_to_element_by_id(&self, id: JsValue, room_name: JsValue) -> Result<(), JsValue> {
		let (Some(id), Some(room_name)) = (present(id), present(room_name)) else {
			return Err(EmbedError::MissingParameter.into());
		};

		let id = coerce_to_string(&id)?;
		let room_name = coerce_to_string(&room_name)?;

		self.controller
			.add_room_to_element_by_id(Some(&id), Some(&room_name))
			.map_err(JsValue::from)
	}
}

/// See [`room::normalize()`].
///
/// # Errors
///
/// A JS `Error` named `ReservedNameError`.
#[wasm_bindgen(js_name = normalizeRoomName)]
pub fn normalize_room_name(raw: JsValue) -> Result<String, JsValue> {
	let raw = present(raw).map(|raw| coerce_to_string(&raw)).transpose()?;

	room::normalize(raw.as_deref()).map_err(|error| EmbedError::from(error).into())
}

/// See [`room::requirements()`].
#[wasm_bindgen(js_name = roomNameRequirements)]
#[must_use]
pub fn room_name_requirements() -> String {
	room::requirements()
}

impl From<EmbedError> for JsValue {
	fn from(value: EmbedError) -> Self {
		let error = js_sys::Error::new(&value.to_string());
		error.set_name(value.kind_name());
		error.into()
	}
}

/// Returns [`None`] for `undefined` and `null`.
fn present(value: JsValue) -> Option<JsValue> {
	if value.is_undefined() || value.is_null() {
		None
	} else {
		Some(value)
	}
}

/// Converts `value` like JS `String(value)` does.
fn coerce_to_string(value: &JsValue) -> Result<String, JsValue> {
	match value.as_string() {
		Some(string) => Ok(string),
		None => js::to_js_string(value).map(String::from),
	}
}

/// Reads a JS options object into a [`Config`].
fn config_from_options(options: &JsValue) -> Config {
	let mut config = Config::new();

	if !options.is_object() {
		return config;
	}

	if let Some(debug) = option(options, "debug").and_then(|debug| debug.as_bool()) {
		config = config.debug(debug);
	}

	if let Some(base_url) = option(options, "baseUrl").and_then(|url| url.as_string()) {
		config = config.base_url(&base_url);
	}

	if let Some(url) = option(options, "randomRoomNameUrl").and_then(|url| url.as_string()) {
		config = config.room_name_source(RoomNameSource::Remote { url });
	}

	config
}

/// Returns the property `key` of `options` if it is set.
fn option(options: &JsValue, key: &str) -> Option<JsValue> {
	Reflect::get(options, &JsValue::from_str(key))
		.ok()
		.and_then(present)
}
