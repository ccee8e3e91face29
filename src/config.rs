//! Configuration of the embedding controller.

/// Origin rooms are hosted on unless configured otherwise.
pub const BASE_URL: &str = "https://appear.in";

/// Where random room names come from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum RoomNameSource {
	/// Generated locally, see [`generate()`](crate::room::random::generate).
	#[default]
	Local,
	/// Fetched from a server answering with `{"roomName": "/..."}`.
	Remote {
		/// Endpoint to `GET`.
		url: String,
	},
}

/// Embedding configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Config {
	/// Origin prepended to canonical room names.
	base_url: String,
	/// See [`RoomNameSource`].
	room_name_source: RoomNameSource,
	/// Install a console logger, see [`Self::debug()`].
	debug: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: BASE_URL.to_owned(),
			room_name_source: RoomNameSource::Local,
			debug: false,
		}
	}
}

impl Config {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the origin rooms are hosted on. Trailing slashes are dropped.
	pub fn base_url(mut self, base_url: &str) -> Self {
		base_url.trim_end_matches('/').clone_into(&mut self.base_url);
		self
	}

	/// Sets where random room names come from.
	pub fn room_name_source(mut self, source: RoomNameSource) -> Self {
		self.room_name_source = source;
		self
	}

	/// Requests a console logger at `Debug` level.
	///
	/// Only the JS `AppearIn` constructor acts on this by installing
	/// `console_log`. Rust callers install their own [`log`] implementation,
	/// the controller never installs one.
	pub fn debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	/// Returns the configured origin.
	#[must_use]
	pub fn get_base_url(&self) -> &str {
		&self.base_url
	}

	/// Returns the configured [`RoomNameSource`].
	#[must_use]
	pub const fn get_room_name_source(&self) -> &RoomNameSource {
		&self.room_name_source
	}

	/// Returns whether a console logger was requested.
	#[must_use]
	pub const fn is_debug(&self) -> bool {
		self.debug
	}

	/// Composes the URL of a canonical room name.
	#[must_use]
	pub fn room_url(&self, canonical: &str) -> String {
		format!("{}{canonical}", self.base_url)
	}
}
