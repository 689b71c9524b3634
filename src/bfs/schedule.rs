//! Scheduling port used by the playback controller.
//!
//! The controller never waits on its own. It asks a [`Scheduler`] to call
//! back later with a [`Tick`] and only acts on the tick it is currently
//! expecting, so a callback that outlives its session does nothing.

use std::collections::VecDeque;

/// Token for one deferred callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tick {
	/// Session generation the tick was issued for.
	pub session: u64,
	/// Position of the tick within its session.
	pub seq: u64,
}

/// Delays callbacks into the controller.
///
/// When the delay elapses, the implementation must hand the tick back to
/// [`Controller::on_tick`](super::controller::Controller::on_tick).
pub trait Scheduler {
	/// Arrange for `tick` to be delivered after `delay_ms` milliseconds.
	fn schedule(&mut self, tick: Tick, delay_ms: u32);
	/// Drop a pending tick. Unknown ticks are ignored.
	fn cancel(&mut self, tick: Tick);
}

/// Scheduler that only records requests; the owner decides when they fire.
///
/// Useful outside a browser and for driving playback deterministically.
#[derive(Debug, Default)]
pub struct ManualScheduler {
	pending: VecDeque<(Tick, u32)>,
	cancelled: Vec<Tick>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Remove and return the oldest pending tick.
	pub fn pop(&mut self) -> Option<Tick> {
		self.pending.pop_front().map(|(tick, _)| tick)
	}

	/// Pending ticks with their requested delays.
	pub fn pending(&self) -> impl Iterator<Item = &(Tick, u32)> {
		self.pending.iter()
	}

	pub fn pending_len(&self) -> usize {
		self.pending.len()
	}

	/// Ticks that were cancelled before firing.
	pub fn cancelled(&self) -> &[Tick] {
		&self.cancelled
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&mut self, tick: Tick, delay_ms: u32) {
		self.pending.push_back((tick, delay_ms));
	}

	fn cancel(&mut self, tick: Tick) {
		let before = self.pending.len();
		self.pending.retain(|(t, _)| *t != tick);
		if self.pending.len() != before {
			self.cancelled.push(tick);
		}
	}
}
