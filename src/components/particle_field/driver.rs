//! Animation loop lifecycle over the scheduling and resize ports.
//!
//! One `AnimationLoop` per field instance. `start` is idempotent while
//! running and `stop` is safe without a prior `start`; between them the
//! loop holds exactly one pending frame request and exactly one resize
//! subscription, both released synchronously on `stop`.

use std::cell::RefCell;
use std::rc::Rc;

use super::ports::{FrameHandle, FrameScheduler, ResizeHandle, ResizeNotifier};

#[derive(Default)]
struct LoopState {
	running: bool,
	frame: Option<Box<dyn FrameHandle>>,
	resize: Option<Box<dyn ResizeHandle>>,
}

/// Drives a per-frame callback chain through the injected ports.
pub struct AnimationLoop {
	scheduler: Rc<dyn FrameScheduler>,
	notifier: Rc<dyn ResizeNotifier>,
	state: Rc<RefCell<LoopState>>,
}

impl AnimationLoop {
	pub fn new(scheduler: Rc<dyn FrameScheduler>, notifier: Rc<dyn ResizeNotifier>) -> Self {
		Self {
			scheduler,
			notifier,
			state: Rc::new(RefCell::new(LoopState::default())),
		}
	}

	/// Begin the loop: subscribe to resize events and schedule the first
	/// frame. Calling this while already running is a no-op, so a double
	/// start cannot leak a duplicate callback chain or listener.
	pub fn start(&self, on_frame: impl FnMut() + 'static, on_resize: impl Fn() + 'static) {
		{
			let mut state = self.state.borrow_mut();
			if state.running {
				return;
			}
			state.running = true;
			state.resize = Some(self.notifier.subscribe(Box::new(on_resize)));
		}
		Self::schedule(
			self.state.clone(),
			self.scheduler.clone(),
			Rc::new(RefCell::new(on_frame)),
		);
	}

	fn schedule(
		state: Rc<RefCell<LoopState>>,
		scheduler: Rc<dyn FrameScheduler>,
		on_frame: Rc<RefCell<dyn FnMut()>>,
	) {
		let callback = {
			let state = state.clone();
			let scheduler = scheduler.clone();
			let on_frame = on_frame.clone();
			move || {
				if !state.borrow().running {
					return;
				}
				(on_frame.borrow_mut())();
				// `on_frame` may have stopped the loop; only then skip the
				// next request.
				if state.borrow().running {
					Self::schedule(state, scheduler, on_frame);
				}
			}
		};
		let handle = scheduler.request_frame(Box::new(callback));
		state.borrow_mut().frame = Some(handle);
	}

	/// Halt the loop and release both registrations. Safe to call before
	/// `start` or more than once.
	pub fn stop(&self) {
		let mut state = self.state.borrow_mut();
		state.running = false;
		// Dropping the guards cancels the pending frame and removes the
		// resize listener.
		state.frame.take();
		state.resize.take();
	}

	pub fn is_running(&self) -> bool {
		self.state.borrow().running
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::collections::BTreeMap;

	use super::*;

	type FrameQueue = Rc<RefCell<BTreeMap<usize, Box<dyn FnOnce()>>>>;

	/// Deterministic stepper standing in for `requestAnimationFrame`.
	#[derive(Default)]
	struct ManualScheduler {
		queue: FrameQueue,
		next_id: Cell<usize>,
	}

	struct ManualFrame {
		id: usize,
		queue: FrameQueue,
	}

	impl FrameHandle for ManualFrame {}

	impl Drop for ManualFrame {
		fn drop(&mut self) {
			// Cancel: no-op if the frame already fired.
			self.queue.borrow_mut().remove(&self.id);
		}
	}

	impl FrameScheduler for ManualScheduler {
		fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Box<dyn FrameHandle> {
			let id = self.next_id.get();
			self.next_id.set(id + 1);
			self.queue.borrow_mut().insert(id, callback);
			Box::new(ManualFrame {
				id,
				queue: self.queue.clone(),
			})
		}
	}

	impl ManualScheduler {
		fn pending(&self) -> usize {
			self.queue.borrow().len()
		}

		/// Fire the oldest pending frame, if any.
		fn fire(&self) -> bool {
			let next = {
				let mut queue = self.queue.borrow_mut();
				let id = queue.keys().next().copied();
				id.and_then(|id| queue.remove(&id))
			};
			match next {
				Some(callback) => {
					callback();
					true
				}
				None => false,
			}
		}
	}

	type ListenerMap = Rc<RefCell<BTreeMap<usize, Box<dyn Fn()>>>>;

	#[derive(Default)]
	struct ManualNotifier {
		listeners: ListenerMap,
		next_id: Cell<usize>,
	}

	struct ManualSubscription {
		id: usize,
		listeners: ListenerMap,
	}

	impl ResizeHandle for ManualSubscription {}

	impl Drop for ManualSubscription {
		fn drop(&mut self) {
			self.listeners.borrow_mut().remove(&self.id);
		}
	}

	impl ResizeNotifier for ManualNotifier {
		fn subscribe(&self, callback: Box<dyn Fn()>) -> Box<dyn ResizeHandle> {
			let id = self.next_id.get();
			self.next_id.set(id + 1);
			self.listeners.borrow_mut().insert(id, callback);
			Box::new(ManualSubscription {
				id,
				listeners: self.listeners.clone(),
			})
		}
	}

	impl ManualNotifier {
		fn active(&self) -> usize {
			self.listeners.borrow().len()
		}

		fn notify(&self) {
			let ids: Vec<usize> = self.listeners.borrow().keys().copied().collect();
			for id in ids {
				if let Some(cb) = self.listeners.borrow().get(&id) {
					cb();
				}
			}
		}
	}

	fn harness() -> (Rc<ManualScheduler>, Rc<ManualNotifier>, AnimationLoop) {
		let scheduler = Rc::new(ManualScheduler::default());
		let notifier = Rc::new(ManualNotifier::default());
		let animation = AnimationLoop::new(scheduler.clone(), notifier.clone());
		(scheduler, notifier, animation)
	}

	#[test]
	fn start_registers_one_frame_and_one_listener() {
		let (scheduler, notifier, animation) = harness();
		animation.start(|| {}, || {});
		assert!(animation.is_running());
		assert_eq!(scheduler.pending(), 1);
		assert_eq!(notifier.active(), 1);
	}

	#[test]
	fn frames_reschedule_while_running() {
		let (scheduler, _notifier, animation) = harness();
		let frames = Rc::new(Cell::new(0));
		let counter = frames.clone();
		animation.start(move || counter.set(counter.get() + 1), || {});

		for _ in 0..5 {
			assert!(scheduler.fire());
		}
		assert_eq!(frames.get(), 5);
		assert_eq!(scheduler.pending(), 1);
	}

	#[test]
	fn double_start_does_not_duplicate_registrations() {
		let (scheduler, notifier, animation) = harness();
		let frames = Rc::new(Cell::new(0));
		let (c1, c2) = (frames.clone(), frames.clone());
		animation.start(move || c1.set(c1.get() + 1), || {});
		animation.start(move || c2.set(c2.get() + 1), || {});

		assert_eq!(scheduler.pending(), 1);
		assert_eq!(notifier.active(), 1);
		scheduler.fire();
		// Only the first chain is alive: one frame, one increment.
		assert_eq!(frames.get(), 1);
		assert_eq!(scheduler.pending(), 1);
	}

	#[test]
	fn stop_cancels_pending_frame_and_listener() {
		let (scheduler, notifier, animation) = harness();
		let frames = Rc::new(Cell::new(0));
		let counter = frames.clone();
		animation.start(move || counter.set(counter.get() + 1), || {});
		scheduler.fire();

		animation.stop();
		assert!(!animation.is_running());
		assert_eq!(scheduler.pending(), 0);
		assert_eq!(notifier.active(), 0);
		assert!(!scheduler.fire());
		assert_eq!(frames.get(), 1);
	}

	#[test]
	fn stop_without_start_is_a_no_op() {
		let (scheduler, notifier, animation) = harness();
		animation.stop();
		animation.stop();
		assert_eq!(scheduler.pending(), 0);
		assert_eq!(notifier.active(), 0);
	}

	#[test]
	fn restart_after_stop_builds_a_fresh_chain() {
		let (scheduler, notifier, animation) = harness();
		animation.start(|| {}, || {});
		animation.stop();
		animation.start(|| {}, || {});
		assert_eq!(scheduler.pending(), 1);
		assert_eq!(notifier.active(), 1);
	}

	#[test]
	fn stop_from_inside_a_frame_halts_the_chain() {
		let scheduler = Rc::new(ManualScheduler::default());
		let notifier = Rc::new(ManualNotifier::default());
		let animation = Rc::new(AnimationLoop::new(scheduler.clone(), notifier.clone()));

		let inner = animation.clone();
		animation.start(move || inner.stop(), || {});
		assert!(scheduler.fire());

		assert!(!animation.is_running());
		assert_eq!(scheduler.pending(), 0);
		assert_eq!(notifier.active(), 0);
	}

	#[test]
	fn resize_notifications_reach_the_running_loop() {
		let (_scheduler, notifier, animation) = harness();
		let resizes = Rc::new(Cell::new(0));
		let counter = resizes.clone();
		animation.start(|| {}, move || counter.set(counter.get() + 1));

		notifier.notify();
		notifier.notify();
		assert_eq!(resizes.get(), 2);

		animation.stop();
		notifier.notify();
		assert_eq!(resizes.get(), 2);
	}
}
