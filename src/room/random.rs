//! Generation of fresh room names.
//!
//! Names are `/` followed by a hyphenated version 4 UUID. Lowercase hex
//! digits can never spell out a reserved name, so generated names are always
//! canonical.

use uuid::{Builder, Uuid};

/// Source of randomness for [`generate_with()`].
pub trait RandomSource {
	/// Fills `buffer` with random bytes.
	fn fill(&mut self, buffer: &mut [u8]);
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
	fn fill(&mut self, buffer: &mut [u8]) {
		(**self).fill(buffer);
	}
}

/// Generates a room name from the system's cryptographic random source.
///
/// In browsers this is `crypto.getRandomValues()`.
#[must_use]
pub fn generate() -> String {
	format_name(Uuid::new_v4())
}

/// Generates a room name from the bytes of `source`.
///
/// The version and variant bits are overwritten, leaving 122 random bits.
pub fn generate_with<R: RandomSource>(mut source: R) -> String {
	let mut bytes = [0; 16];
	source.fill(&mut bytes);

	format_name(Builder::from_random_bytes(bytes).into_uuid())
}

/// Formats `uuid` as a room path.
fn format_name(uuid: Uuid) -> String {
	format!("/{}", uuid.hyphenated())
}
