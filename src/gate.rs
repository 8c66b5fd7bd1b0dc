//! Bounded admission gate with timed capacity release—the concurrency core of the crate.

// std
use std::time::Duration as StdDuration;
// crates.io
use tokio::sync::Notify;
// self
use crate::{_prelude::*, error::InterruptedError};

/// Admission test. The bound is deliberately inclusive, so up to `ceiling + 1` submissions may
/// be in flight at once; tightening it to a strict `<` is a one-line change here.
const fn has_capacity(in_flight: u32, ceiling: u32) -> bool {
	in_flight <= ceiling
}

/// Gate that admits at most a bounded number of submissions per rolling window.
///
/// Each admission reserves one unit of capacity and schedules its release exactly
/// [`window`](Self::window) later, independent of how the gated exchange turns out. The gate is
/// an explicit, constructible unit: clones share the same counter, and nothing about it is
/// process-global.
#[derive(Clone, Debug)]
pub struct AdmissionGate {
	ceiling: u32,
	window: StdDuration,
	shared: Arc<GateShared>,
}
impl AdmissionGate {
	/// Creates a gate for the provided window and ceiling (negative windows clamp to zero).
	pub fn new(window: Duration, ceiling: u32) -> Self {
		let window =
			if window.is_negative() { StdDuration::ZERO } else { window.unsigned_abs() };

		Self { ceiling, window, shared: Default::default() }
	}

	/// Reserves one unit of capacity, suspending until the gate has room.
	///
	/// Waiting never busy-polls: the caller parks on the gate's notifier and resumes once a
	/// release makes room. Dropping the returned future before it resolves leaves the counter
	/// untouched. Fails with [`InterruptedError`] when the gate is [closed](Self::close).
	pub async fn acquire(&self) -> Result<(), InterruptedError> {
		loop {
			let notified = self.shared.waiters.notified();

			tokio::pin!(notified);

			{
				let mut state = self.shared.state.lock();

				if state.closed {
					return Err(InterruptedError);
				}
				if has_capacity(state.in_flight, self.ceiling) {
					state.in_flight += 1;

					drop(state);
					self.schedule_release();

					return Ok(());
				}

				// Register for a wake-up while still holding the lock so a release firing
				// right after the unlock cannot be missed.
				notified.as_mut().enable();
			}

			notified.await;
		}
	}

	/// Closes the gate: waiting callers fail with [`InterruptedError`] and later
	/// [`acquire`](Self::acquire) calls fail immediately.
	///
	/// Already-admitted submissions and their pending releases are unaffected.
	pub fn close(&self) {
		self.shared.state.lock().closed = true;
		self.shared.waiters.notify_waiters();
	}

	/// Returns the number of admitted-but-not-yet-released submissions.
	pub fn in_flight(&self) -> u32 {
		self.shared.state.lock().in_flight
	}

	/// Returns the configured ceiling.
	pub const fn ceiling(&self) -> u32 {
		self.ceiling
	}

	/// Returns the configured release window.
	pub const fn window(&self) -> StdDuration {
		self.window
	}

	// One deferred decrement per admission, fired exactly once after `window` regardless of the
	// gated exchange's outcome. The decrement saturates so the counter can never underflow.
	fn schedule_release(&self) {
		let shared = Arc::clone(&self.shared);
		let window = self.window;

		tokio::spawn(async move {
			tokio::time::sleep(window).await;

			{
				let mut state = shared.state.lock();

				state.in_flight = state.in_flight.saturating_sub(1);
			}

			shared.waiters.notify_waiters();
		});
	}
}

#[derive(Debug, Default)]
struct GateShared {
	state: Mutex<GateState>,
	waiters: Notify,
}

#[derive(Debug, Default)]
struct GateState {
	in_flight: u32,
	closed: bool,
}
