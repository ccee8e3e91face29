//! Detection of host support for real-time peer connections.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use js_sys::Reflect;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use wasm_bindgen::JsValue;

/// Global bindings exposing a peer connection, in the order they are probed.
pub const PEER_CONNECTION_BINDINGS: [&str; 3] = [
	"mozRTCPeerConnection",
	"webkitRTCPeerConnection",
	"RTCPeerConnection",
];

/// Answers whether the host environment exposes a named global binding.
pub trait CapabilityProbe {
	/// Returns [`true`] if `binding` is present.
	fn has_binding(&self, binding: &str) -> bool;
}

impl<F: Fn(&str) -> bool> CapabilityProbe for F {
	fn has_binding(&self, binding: &str) -> bool {
		self(binding)
	}
}

/// Returns [`true`] if `probe` reports any of the
/// [`PEER_CONNECTION_BINDINGS`].
pub fn has_peer_connection<P: CapabilityProbe>(probe: &P) -> bool {
	let found = PEER_CONNECTION_BINDINGS
		.into_iter()
		.find(|binding| probe.has_binding(binding));

	match found {
		Some(binding) => {
			log::debug!("found peer connection binding `{binding}`");
			true
		}
		None => {
			log::debug!("no peer connection binding found");
			false
		}
	}
}

/// [`CapabilityProbe`] reading the JS global object.
///
/// Outside of Wasm it never finds any binding.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalProbe;

impl CapabilityProbe for GlobalProbe {
	#[cfg(all(target_family = "wasm", target_os = "unknown"))]
	fn has_binding(&self, binding: &str) -> bool {
		Reflect::get(&js_sys::global(), &JsValue::from_str(binding))
			.is_ok_and(|value| !value.is_undefined() && !value.is_null())
	}

	#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
	fn has_binding(&self, _: &str) -> bool {
		false
	}
}
