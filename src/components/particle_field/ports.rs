//! Scheduling and resize-notification ports for the animation loop.
//!
//! The field never talks to `requestAnimationFrame` or the window resize
//! event directly; it goes through these two traits so the loop can be
//! driven deterministically in tests. Both ports hand back a guard value:
//! dropping it releases the underlying registration, which ties teardown
//! structurally to setup instead of relying on a manual cleanup call.

/// Guard for one pending frame request. Dropping it cancels the request if
/// it has not fired yet.
pub trait FrameHandle {}

/// Source of per-frame callbacks ("request next tick").
pub trait FrameScheduler {
	/// Schedule `callback` to run once on the next frame.
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Box<dyn FrameHandle>;
}

/// Guard for one resize subscription. Dropping it removes the listener.
pub trait ResizeHandle {}

/// Source of surface-resize notifications.
pub trait ResizeNotifier {
	/// Register `callback` for every resize until the handle is dropped.
	fn subscribe(&self, callback: Box<dyn Fn()>) -> Box<dyn ResizeHandle>;
}
