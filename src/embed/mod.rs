//! Attaching rooms to elements of the host page.

mod future;

use web_sys::Element;

pub use self::future::{RandomRoomName, WithCallback};
use crate::capability::{self, CapabilityProbe, GlobalProbe};
use crate::config::{Config, RoomNameSource};
use crate::room::random;
use crate::{room, EmbedError};

/// Embeds hosted rooms into the host page.
///
/// Holds no state besides its [`Config`] and [`CapabilityProbe`], every call
/// is independent.
#[derive(Clone, Debug)]
pub struct EmbedController<P = GlobalProbe> {
	/// Configuration.
	config: Config,
	/// Used by [`Self::is_web_rtc_compatible()`].
	probe: P,
}

impl Default for EmbedController {
	fn default() -> Self {
		Self::new(Config::default())
	}
}

impl EmbedController {
	/// Creates a controller probing the JS global object.
	pub const fn new(config: Config) -> Self {
		Self::with_probe(config, GlobalProbe)
	}
}

/// Element a room is attached to.
#[derive(Clone, Copy, Debug)]
enum Target<'element> {
	/// Passed directly by the caller.
	Element(&'element Element),
	/// Looked up in the document.
	Id(&'element str),
}

impl Target<'_> {
	/// Returns the element this target refers to.
	fn resolve(self) -> Result<Element, EmbedError> {
		match self {
			Self::Element(element) => Ok(element.clone()),
			Self::Id(id) => web_sys::window()
				.and_then(|window| window.document())
				.ok_or(EmbedError::Unsupported)?
				.get_element_by_id(id)
				.ok_or_else(|| EmbedError::ElementNotFound { id: id.to_owned() }),
		}
	}
}

impl<P: CapabilityProbe> EmbedController<P> {
	/// Creates a controller using a custom [`CapabilityProbe`].
	pub const fn with_probe(config: Config, probe: P) -> Self {
		Self { config, probe }
	}

	/// Returns the [`Config`] of this controller.
	#[must_use]
	pub const fn config(&self) -> &Config {
		&self.config
	}

	/// Returns [`true`] if the host exposes a peer connection.
	#[must_use]
	pub fn is_web_rtc_compatible(&self) -> bool {
		capability::has_peer_connection(&self.probe)
	}

	/// Produces a fresh canonical room name starting with `/`.
	///
	/// Failures, e.g. of a [`RoomNameSource::Remote`], are reported as the
	/// output of the returned future.
	pub fn random_room_name(&self) -> RandomRoomName {
		match self.config.get_room_name_source() {
			RoomNameSource::Local => RandomRoomName::ready(&random::generate()),
			RoomNameSource::Remote { url } => RandomRoomName::remote(url.clone()),
		}
	}

	/// Like [`Self::random_room_name()`], but `callback` is called with the
	/// name before the returned future resolves.
	///
	/// `callback` is not called on failure.
	pub fn random_room_name_with<C: FnOnce(&str)>(
		&self,
		callback: C,
	) -> WithCallback<RandomRoomName, C> {
		WithCallback::new(self.random_room_name(), callback)
	}

	/// Points `element` at the room named `room_name`.
	///
	/// # Errors
	///
	/// - [`EmbedError::MissingParameter`] if any argument is [`None`].
	/// - [`EmbedError::InvalidElement`] if `element` is not an iframe.
	/// - [`EmbedError::ReservedName`] if `room_name` is reserved.
	pub fn add_room_to_iframe(
		&self,
		element: Option<&Element>,
		room_name: Option<&str>,
	) -> Result<(), EmbedError> {
		let (Some(element), Some(room_name)) = (element, room_name) else {
			return Err(EmbedError::MissingParameter);
		};

		self.attach(Target::Element(element), room_name)
	}

	/// Points the element with id `id` at the room named `room_name`.
	///
	/// # Errors
	///
	/// Same as [`Self::add_room_to_iframe()`], additionally
	/// [`EmbedError::ElementNotFound`] if the document has no element with
	/// this id.
	pub fn add_room_to_element_by_id(
		&self,
		id: Option<&str>,
		room_name: Option<&str>,
	) -> Result<(), EmbedError> {
		let (Some(id), Some(room_name)) = (id, room_name) else {
			return Err(EmbedError::MissingParameter);
		};

		self.attach(Target::Id(id), room_name)
	}

	/// Resolves `target`, validates it and assigns the room URL.
	fn attach(&self, target: Target<'_>, room_name: &str) -> Result<(), EmbedError> {
		let element = target.resolve()?;

		if !element.tag_name().eq_ignore_ascii_case("iframe") {
			log::debug!("refusing to attach room to `<{}>`", element.tag_name());
			return Err(EmbedError::InvalidElement);
		}

		let canonical = room::normalize(Some(room_name))?;
		let url = self.config.room_url(&canonical);

		element
			.set_attribute("src", &url)
			.map_err(|_| EmbedError::InvalidElement)?;

		log::debug!("attached room {url}");

		Ok(())
	}
}
