//! # Description
//!
//! Embeds hosted video-chat rooms into web pages.
//!
//! Room names are canonicalized by [`room::normalize()`]: lowercase, a single
//! leading `/`, no trailing `/` and no prefix from
//! [`RESERVED_NAMES`](room::RESERVED_NAMES). An [`EmbedController`] then
//! points an iframe of the host page at `base_url + room_name`.
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(all(target_family = "wasm", target_os = "unknown"))]
//! # fn main() -> Result<(), appearin_embed::EmbedError> {
//! use appearin_embed::{Config, EmbedController};
//!
//! let controller = EmbedController::new(Config::default());
//!
//! if controller.is_web_rtc_compatible() {
//! 	controller.add_room_to_element_by_id(Some("room"), Some("My-Room/"))?;
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
//! # fn main() {}
//! ```
//!
//! # JavaScript
//!
//! When compiled to Wasm the `AppearIn` class is exported, offering
//! `isWebRtcCompatible()`, `getRandomRoomName(callback?)`,
//! `addRoomToIframe(element, roomName)` and
//! `addRoomToElementById(id, roomName)`.
//!
//! # Non-goals
//!
//! Only the presence of peer connection support is checked, no connection is
//! ever negotiated.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod bindings;
pub mod capability;
mod config;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod embed;
mod error;
pub mod room;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use self::bindings::{normalize_room_name, room_name_requirements, AppearIn};
pub use self::config::{Config, RoomNameSource, BASE_URL};
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use self::embed::{EmbedController, RandomRoomName, WithCallback};
pub use self::error::EmbedError;
