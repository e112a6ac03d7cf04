//! `web_sys` implementations of the animation ports.
//!
//! Frame requests map onto `requestAnimationFrame` and resize
//! subscriptions onto the window `resize` event. All registrations are
//! released in `Drop`, so the guards returned by the ports are the only
//! cleanup surface. In a context without a window (e.g. unit tests on the
//! host target) every operation degrades to a no-op.

use wasm_bindgen::prelude::*;

use super::ports::{FrameHandle, FrameScheduler, ResizeHandle, ResizeNotifier};

/// Frame scheduling via `requestAnimationFrame`.
pub struct BrowserFrames;

struct FrameRequest {
	id: Option<i32>,
	// Keeps the JS shim alive until the frame fires or is cancelled.
	_closure: Closure<dyn FnMut()>,
}

impl FrameHandle for FrameRequest {}

impl Drop for FrameRequest {
	fn drop(&mut self) {
		// Cancelling an already-fired id is a no-op in the browser.
		if let (Some(window), Some(id)) = (web_sys::window(), self.id) {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

impl FrameScheduler for BrowserFrames {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Box<dyn FrameHandle> {
		let closure = Closure::once(callback);
		let id = web_sys::window()
			.and_then(|window| window.request_animation_frame(closure.as_ref().unchecked_ref()).ok());
		Box::new(FrameRequest {
			id,
			_closure: closure,
		})
	}
}

/// Resize notifications from the window `resize` event.
pub struct WindowResize;

struct ResizeSubscription {
	closure: Closure<dyn FnMut()>,
}

impl ResizeHandle for ResizeSubscription {}

impl Drop for ResizeSubscription {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				"resize",
				self.closure.as_ref().unchecked_ref(),
			);
		}
	}
}

impl ResizeNotifier for WindowResize {
	fn subscribe(&self, callback: Box<dyn Fn()>) -> Box<dyn ResizeHandle> {
		let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
		if let Some(window) = web_sys::window() {
			let _ = window
				.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
		}
		Box::new(ResizeSubscription { closure })
	}
}
