//! Browser scheduler backed by `window.setTimeout`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::bfs::{Controller, Scheduler, Tick};

/// Controller driven by browser timers, shared between event handlers.
pub type SharedController = Rc<RefCell<Controller<WebScheduler>>>;

/// A timeout that has been handed to the browser.
///
/// The callback is owned here so clearing the timeout also frees it.
struct PendingTimeout {
	tick: Tick,
	handle: i32,
	_callback: Closure<dyn FnMut()>,
}

/// Schedules controller ticks with `setTimeout` and cancels them with
/// `clearTimeout`. Fired ticks are delivered through a weak handle so a
/// dropped controller simply stops receiving them.
pub struct WebScheduler {
	target: Weak<RefCell<Controller<WebScheduler>>>,
	pending: Option<PendingTimeout>,
}

impl WebScheduler {
	/// Create a controller wired to its own browser scheduler.
	pub fn controller(delay_ms: u32) -> SharedController {
		Rc::new_cyclic(|weak| {
			RefCell::new(Controller::new(
				WebScheduler {
					target: weak.clone(),
					pending: None,
				},
				delay_ms,
			))
		})
	}

	/// Tick of the timeout currently held, fired or not.
	pub fn pending_tick(&self) -> Option<Tick> {
		self.pending.as_ref().map(|p| p.tick)
	}

	fn clear(&mut self) {
		if let Some(pending) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				window.clear_timeout_with_handle(pending.handle);
			}
		}
	}
}

impl Scheduler for WebScheduler {
	fn schedule(&mut self, tick: Tick, delay_ms: u32) {
		// The previous callback may be the one running right now; wasm-bindgen
		// defers freeing it until it returns.
		self.clear();
		let Some(window) = web_sys::window() else {
			warn!("bfs-stepper: no window, cannot schedule step");
			return;
		};
		let target = self.target.clone();
		let callback = Closure::<dyn FnMut()>::new(move || {
			if let Some(controller) = target.upgrade() {
				controller.borrow_mut().on_tick(tick);
			}
		});
		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			delay_ms.min(i32::MAX as u32) as i32,
		) {
			Ok(handle) => {
				self.pending = Some(PendingTimeout {
					tick,
					handle,
					_callback: callback,
				})
			}
			Err(e) => warn!("bfs-stepper: setTimeout failed: {:?}", e),
		}
	}

	fn cancel(&mut self, tick: Tick) {
		if self.pending_tick() == Some(tick) {
			self.clear();
		}
	}
}
