//! Futures returned by [`EmbedController`](super::EmbedController).

use std::fmt::{self, Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use js_sys::Reflect;
use pin_project::pin_project;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::room;
use crate::EmbedError;

/// Waits for a random room name.
///
/// Resolves exactly once to a canonical room name starting with `/`.
#[must_use = "does nothing if not polled"]
pub struct RandomRoomName(State);

/// State of [`RandomRoomName`].
enum State {
	/// Name was determined synchronously.
	Ready(Option<Result<String, EmbedError>>),
	/// Waiting for the server.
	Remote(Pin<Box<dyn Future<Output = Result<String, EmbedError>>>>),
}

impl Debug for RandomRoomName {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		let state = match &self.0 {
			State::Ready(Some(_)) => "Ready",
			State::Ready(None) => "Done",
			State::Remote(_) => "Remote",
		};

		formatter
			.debug_tuple("RandomRoomName")
			.field(&state)
			.finish()
	}
}

impl RandomRoomName {
	/// Creates a [`RandomRoomName`] from an already generated name.
	pub(super) fn ready(raw: &str) -> Self {
		Self(State::Ready(Some(
			room::normalize(Some(raw)).map_err(EmbedError::from),
		)))
	}

	/// Creates a [`RandomRoomName`] asking `url` for a name.
	pub(super) fn remote(url: String) -> Self {
		Self(State::Remote(Box::pin(fetch_room_name(url))))
	}
}

impl Future for RandomRoomName {
	type Output = Result<String, EmbedError>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match &mut self.0 {
			State::Ready(result) => Poll::Ready(result.take().expect("polled after `Ready`")),
			State::Remote(future) => future.as_mut().poll(cx),
		}
	}
}

/// `GET`s `url` and extracts the `roomName` of the JSON body.
async fn fetch_room_name(url: String) -> Result<String, EmbedError> {
	let window = web_sys::window().ok_or(EmbedError::Unsupported)?;

	log::debug!("requesting random room name from {url}");

	let response: Response = JsFuture::from(window.fetch_with_str(&url))
		.await
		.and_then(JsValue::dyn_into)
		.map_err(remote_error)?;

	if !response.ok() {
		return Err(EmbedError::RandomRoomName(format!(
			"server answered with status {}",
			response.status()
		)));
	}

	let body = JsFuture::from(response.json().map_err(remote_error)?)
		.await
		.map_err(remote_error)?;
	let raw = Reflect::get(&body, &JsValue::from_str("roomName"))
		.map_err(remote_error)?
		.as_string()
		.ok_or_else(|| EmbedError::RandomRoomName("response has no `roomName`".to_owned()))?;

	let name = room::normalize(Some(&raw))?;

	if name.is_empty() {
		return Err(EmbedError::RandomRoomName(
			"server answered with an empty room name".to_owned(),
		));
	}

	Ok(name)
}

/// Converts a thrown JS value into [`EmbedError::RandomRoomName`].
fn remote_error(error: JsValue) -> EmbedError {
	let reason = error
		.dyn_ref::<js_sys::Error>()
		.map(|error| String::from(error.message()))
		.or_else(|| error.as_string())
		.unwrap_or_else(|| "unknown failure".to_owned());

	EmbedError::RandomRoomName(reason)
}

/// Calls a listener with the room name before resolving.
///
/// Created by
/// [`EmbedController::random_room_name_with()`](super::EmbedController::random_room_name_with).
#[pin_project]
#[must_use = "does nothing if not polled"]
pub struct WithCallback<F, C> {
	/// Wrapped future.
	#[pin]
	future: F,
	/// Taken when the future resolves successfully.
	callback: Option<C>,
}

impl<F: Debug, C> Debug for WithCallback<F, C> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("WithCallback")
			.field("future", &self.future)
			.field("pending", &self.callback.is_some())
			.finish()
	}
}

impl<F, C> WithCallback<F, C> {
	/// Attaches `callback` to `future`.
	pub(super) const fn new(future: F, callback: C) -> Self {
		Self {
			future,
			callback: Some(callback),
		}
	}
}

impl<F, C> Future for WithCallback<F, C>
where
	F: Future<Output = Result<String, EmbedError>>,
	C: FnOnce(&str),
{
	type Output = F::Output;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		let this = self.project();
		let result = ready!(this.future.poll(cx));

		if let (Ok(name), Some(callback)) = (&result, this.callback.take()) {
			callback(name);
		}

		Poll::Ready(result)
	}
}
