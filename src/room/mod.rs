//! Room name canonicalization.

pub mod random;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// Path segments no room is allowed to start with.
///
/// These collide with structural paths of the hosting site. Collisions are
/// checked by prefix, so `/images/foo.jpg` and `/imagesofcats` are rejected
/// just like `/images`.
pub const RESERVED_NAMES: [&str; 11] = [
	"templates",
	"styles",
	"scripts",
	"libraries",
	"i",
	"images",
	"information",
	"error",
	"extensions",
	"translations",
	"robots.txt",
];

/// Human-readable description of the room naming rules.
#[must_use]
pub fn requirements() -> String {
	format!(
		"the room name cannot start with any of these reserved words: {}.",
		RESERVED_NAMES.join(", ")
	)
}

/// Canonicalizes a raw room name.
///
/// The result is lowercase, trimmed, has exactly one leading `/` and no
/// trailing `/`. Missing or empty input yields an empty string.
///
/// # Errors
///
/// If the canonical name starts with any of the [`RESERVED_NAMES`].
pub fn normalize(raw: Option<&str>) -> Result<String, ReservedNameError> {
	let raw = raw.unwrap_or_default();

	let with_slash = if raw.is_empty() || raw.starts_with('/') {
		raw.to_owned()
	} else {
		format!("/{raw}")
	};

	// Whitespace between trailing slashes is stripped too, otherwise a second
	// pass could trim further.
	let canonical = with_slash
		.trim()
		.to_lowercase()
		.trim_end_matches(|character: char| character == '/' || character.is_whitespace())
		.to_owned();

	if let Some(reserved) = reserved_prefix(&canonical) {
		log::debug!("rejected room name {canonical:?}: collides with {reserved:?}");
		return Err(ReservedNameError);
	}

	Ok(canonical)
}

/// Returns the first reserved name `canonical` starts with.
fn reserved_prefix(canonical: &str) -> Option<&'static str> {
	let path = canonical.strip_prefix('/')?;

	RESERVED_NAMES
		.into_iter()
		.find(|reserved| path.starts_with(reserved))
}

/// A canonical room name.
///
/// Only constructed through [`normalize()`], so it always upholds the
/// canonical form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RoomName(String);

impl RoomName {
	/// Canonicalizes `raw` into a [`RoomName`].
	///
	/// # Errors
	///
	/// If `raw` collides with a reserved name.
	pub fn new(raw: &str) -> Result<Self, ReservedNameError> {
		normalize(Some(raw)).map(Self)
	}

	/// The canonical path, including the leading `/`.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the inner [`String`].
	#[must_use]
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Deref for RoomName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<str> for RoomName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Display for RoomName {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(&self.0)
	}
}

impl From<RoomName> for String {
	fn from(value: RoomName) -> Self {
		value.0
	}
}

/// Returned by [`normalize()`] when a room name is reserved.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ReservedNameError;

impl Display for ReservedNameError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "this name is reserved; choose another room name.")
	}
}

impl Error for ReservedNameError {}
