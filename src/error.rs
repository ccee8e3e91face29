//! Errors returned when embedding a room.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::room::ReservedNameError;

/// Failure of an embedding operation.
///
/// All variants describe a caller-correctable problem, nothing is retried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EmbedError {
	/// A required argument was absent.
	MissingParameter,
	/// The target element is not an iframe.
	InvalidElement,
	/// No element with the given id exists in the document.
	ElementNotFound {
		/// The id that was looked up.
		id: String,
	},
	/// The room name collides with a reserved name.
	ReservedName(ReservedNameError),
	/// Retrieving a random room name from a remote source failed.
	RandomRoomName(String),
	/// No `window` or `document` is available in this context.
	Unsupported,
}

impl EmbedError {
	/// Stable name of the error kind.
	#[must_use]
	pub const fn kind_name(&self) -> &'static str {
		match self {
			Self::MissingParameter => "MissingParameterError",
			Self::InvalidElement => "InvalidElementError",
			Self::ElementNotFound { .. } => "ElementNotFoundError",
			Self::ReservedName(_) => "ReservedNameError",
			Self::RandomRoomName(_) => "RandomRoomNameError",
			Self::Unsupported => "UnsupportedError",
		}
	}
}

impl Display for EmbedError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingParameter => {
				write!(formatter, "missing parameters or was passed as undefined")
			}
			Self::InvalidElement => write!(formatter, "this is not an iframe element"),
			Self::ElementNotFound { id } => write!(
				formatter,
				"the element with id {id} was not found; make sure it exists on the page"
			),
			Self::ReservedName(error) => Display::fmt(error, formatter),
			Self::RandomRoomName(reason) => {
				write!(formatter, "failed to retrieve a random room name: {reason}")
			}
			Self::Unsupported => write!(formatter, "no document is available in this context"),
		}
	}
}

impl Error for EmbedError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::ReservedName(error) => Some(error),
			_ => None,
		}
	}
}

impl From<ReservedNameError> for EmbedError {
	fn from(value: ReservedNameError) -> Self {
		Self::ReservedName(value)
	}
}
