//! Animated playback of a generated step trace.
//!
//! A [`Controller`] owns at most one [`Session`]. Starting a run materializes
//! the full trace, then plays it one step per scheduler tick. Each applied
//! step is folded into the session's [`VisualState`] and broadcast to the
//! registered [`PlaybackObserver`]s.
//!
//! State machine:
//!
//! ```text
//! Idle ──start──▶ Running ⇄ Paused
//!                    │
//!              Path / Done
//!                    ▼
//!                Finished ──start──▶ Running
//! ```
//!
//! `reset` returns to `Idle` from any state.

use log::{debug, info, trace};
use thiserror::Error;

use super::graph::{Graph, NodeId};
use super::schedule::{Scheduler, Tick};
use super::step::{Step, generate_steps};
use super::visual::VisualState;

/// Delay between steps when nothing else is configured.
pub const DEFAULT_DELAY_MS: u32 = 700;

/// Lifecycle of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
	#[default]
	Idle,
	Running,
	Paused,
	Finished,
}

/// Status shown by the status indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
	#[default]
	Idle,
	Running,
	Paused,
	Done,
	NoPath,
}

impl SearchStatus {
	pub fn label(self) -> &'static str {
		match self {
			SearchStatus::Idle => "Idle",
			SearchStatus::Running => "Running…",
			SearchStatus::Paused => "Paused",
			SearchStatus::Done => "Done",
			SearchStatus::NoPath => "No Path",
		}
	}
}

/// How a finished run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// The goal was reached along this shortest path.
	PathFound(Vec<NodeId>),
	/// The queue emptied before the goal was dequeued.
	NoPath { goal: NodeId },
	/// No goal was set; every reachable node was visited.
	Traversed { visited: usize },
}

impl Outcome {
	fn from_terminal(step: &Step, goal: Option<NodeId>) -> Option<Self> {
		match step {
			Step::Path { path, .. } => Some(Outcome::PathFound(path.clone())),
			Step::Done { visited } => Some(match goal {
				Some(goal) => Outcome::NoPath { goal },
				None => Outcome::Traversed {
					visited: visited.len(),
				},
			}),
			_ => None,
		}
	}
}

/// Rejected requests. None of these change controller state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
	#[error("a search is already running, reset it first")]
	AlreadyRunning,
	#[error("start node must be between 0 and {}, got {node}", .node_count.saturating_sub(1))]
	InvalidStart { node: NodeId, node_count: usize },
	#[error("goal node must be between 0 and {}, got {node}", .node_count.saturating_sub(1))]
	InvalidGoal { node: NodeId, node_count: usize },
}

/// Payload delivered to observers after every applied step.
#[derive(Debug)]
pub struct StepApplied<'a> {
	/// Index of the applied step within the trace.
	pub index: usize,
	/// Number of steps in the trace.
	pub total: usize,
	pub step: &'a Step,
	/// Visual state after folding `step`.
	pub visual: &'a VisualState,
	/// True for `Path` and `Done`; nothing follows.
	pub is_terminal: bool,
	/// Set once a terminal step has been applied.
	pub outcome: Option<&'a Outcome>,
}

/// Receives playback events. Every method defaults to doing nothing.
///
/// Observers only see state handed to them; they never mutate the session.
pub trait PlaybackObserver {
	/// A new session was created and is about to run.
	fn on_start(&mut self, _session: &Session) {}
	/// A step was applied.
	fn on_step(&mut self, _event: &StepApplied<'_>) {}
	/// The controller changed state.
	fn on_state(&mut self, _state: PlaybackState, _status: SearchStatus) {}
	/// The controller was reset and holds no session.
	fn on_reset(&mut self) {}
}

/// One traversal run: the materialized trace and the playback cursor.
#[derive(Debug)]
pub struct Session {
	id: u64,
	steps: Vec<Step>,
	index: usize,
	visual: VisualState,
	start: NodeId,
	goal: Option<NodeId>,
	outcome: Option<Outcome>,
	pending: Option<Tick>,
	next_seq: u64,
}

impl Session {
	pub fn id(&self) -> u64 {
		self.id
	}

	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Index of the next step to apply.
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn total(&self) -> usize {
		self.steps.len()
	}

	pub fn visual(&self) -> &VisualState {
		&self.visual
	}

	pub fn start(&self) -> NodeId {
		self.start
	}

	pub fn goal(&self) -> Option<NodeId> {
		self.goal
	}

	pub fn outcome(&self) -> Option<&Outcome> {
		self.outcome.as_ref()
	}

	/// The tick the session is waiting for, if any.
	pub fn pending(&self) -> Option<Tick> {
		self.pending
	}
}

/// Drives a step trace forward under a delay, one tick at a time.
pub struct Controller<S> {
	scheduler: S,
	state: PlaybackState,
	session: Option<Session>,
	generation: u64,
	delay_ms: u32,
	observers: Vec<Box<dyn PlaybackObserver>>,
}

impl<S: Scheduler> Controller<S> {
	pub fn new(scheduler: S, delay_ms: u32) -> Self {
		Self {
			scheduler,
			state: PlaybackState::Idle,
			session: None,
			generation: 0,
			delay_ms,
			observers: Vec::new(),
		}
	}

	pub fn subscribe(&mut self, observer: Box<dyn PlaybackObserver>) {
		self.observers.push(observer);
	}

	pub fn state(&self) -> PlaybackState {
		self.state
	}

	pub fn status(&self) -> SearchStatus {
		match self.state {
			PlaybackState::Idle => SearchStatus::Idle,
			PlaybackState::Running => SearchStatus::Running,
			PlaybackState::Paused => SearchStatus::Paused,
			PlaybackState::Finished => match self.session.as_ref().and_then(Session::outcome) {
				Some(Outcome::NoPath { .. }) => SearchStatus::NoPath,
				_ => SearchStatus::Done,
			},
		}
	}

	pub fn session(&self) -> Option<&Session> {
		self.session.as_ref()
	}

	pub fn delay_ms(&self) -> u32 {
		self.delay_ms
	}

	/// Change the step delay. Takes effect from the next scheduled step.
	pub fn set_delay(&mut self, delay_ms: u32) {
		self.delay_ms = delay_ms;
	}

	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	pub fn scheduler_mut(&mut self) -> &mut S {
		&mut self.scheduler
	}

	/// Begin a new run from `start`, optionally searching for `goal`.
	///
	/// Fails without touching any state while a run is in progress (running
	/// or paused) or when an identifier lies outside the graph. A finished
	/// session is discarded first.
	pub fn start(
		&mut self,
		graph: &Graph,
		start: NodeId,
		goal: Option<NodeId>,
		delay_ms: u32,
	) -> Result<(), PlaybackError> {
		if matches!(self.state, PlaybackState::Running | PlaybackState::Paused) {
			return Err(PlaybackError::AlreadyRunning);
		}
		let node_count = graph.node_count();
		if !graph.contains(start) {
			return Err(PlaybackError::InvalidStart {
				node: start,
				node_count,
			});
		}
		if let Some(goal) = goal.filter(|&g| !graph.contains(g)) {
			return Err(PlaybackError::InvalidGoal {
				node: goal,
				node_count,
			});
		}

		self.teardown();
		self.generation += 1;
		self.delay_ms = delay_ms;

		let steps = generate_steps(graph, start, goal);
		info!(
			"bfs: session {} from node {} ({}), {} steps",
			self.generation,
			start,
			goal.map_or_else(|| "full traversal".to_string(), |g| format!("goal {g}")),
			steps.len()
		);
		let session = Session {
			id: self.generation,
			steps,
			index: 0,
			visual: VisualState::new(node_count, start, goal),
			start,
			goal,
			outcome: None,
			pending: None,
			next_seq: 0,
		};
		for observer in &mut self.observers {
			observer.on_start(&session);
		}
		self.session = Some(session);
		self.set_state(PlaybackState::Running);
		self.schedule_next();
		Ok(())
	}

	/// Entry point for scheduler callbacks.
	///
	/// Only the tick the current session is waiting for is honoured; anything
	/// else (cancelled, from an older session, or a duplicate) is dropped.
	pub fn on_tick(&mut self, tick: Tick) {
		match self.session.as_mut() {
			Some(session) if session.pending == Some(tick) => session.pending = None,
			_ => {
				trace!("bfs: dropping stale tick {tick:?}");
				return;
			}
		}
		self.play_one_step();
	}

	/// Apply the next step and schedule the one after it.
	///
	/// Does nothing unless running; a paused run waits for [`resume`](Self::resume).
	pub fn play_one_step(&mut self) {
		if self.state != PlaybackState::Running {
			return;
		}
		let Some(session) = self.session.as_mut() else {
			return;
		};
		if session.index >= session.steps.len() {
			self.finish();
			return;
		}

		let index = session.index;
		let step = &session.steps[index];
		session.visual.apply(step);
		let is_terminal = step.is_terminal();
		if is_terminal {
			session.outcome = Outcome::from_terminal(step, session.goal);
		}
		session.index += 1;
		debug!("bfs: step {}/{} {:?}", index + 1, session.steps.len(), step.kind());

		let event = StepApplied {
			index,
			total: session.steps.len(),
			step,
			visual: &session.visual,
			is_terminal,
			outcome: session.outcome.as_ref(),
		};
		for observer in &mut self.observers {
			observer.on_step(&event);
		}

		if is_terminal {
			self.finish();
		} else {
			self.schedule_next();
		}
	}

	/// Suspend a running session. Returns false if nothing was running.
	pub fn pause(&mut self) -> bool {
		if self.state != PlaybackState::Running {
			return false;
		}
		self.cancel_pending();
		self.set_state(PlaybackState::Paused);
		true
	}

	/// Continue a paused session after a full delay. Returns false if not paused.
	pub fn resume(&mut self) -> bool {
		if self.state != PlaybackState::Paused {
			return false;
		}
		self.set_state(PlaybackState::Running);
		self.schedule_next();
		true
	}

	/// Pause when running, resume when paused.
	pub fn toggle_pause(&mut self) -> bool {
		match self.state {
			PlaybackState::Running => self.pause(),
			PlaybackState::Paused => self.resume(),
			_ => false,
		}
	}

	/// Cancel any pending step, drop the session, and return to idle.
	pub fn reset(&mut self) {
		self.teardown();
		self.generation += 1;
		info!("bfs: reset");
		for observer in &mut self.observers {
			observer.on_reset();
		}
		self.set_state(PlaybackState::Idle);
	}

	fn schedule_next(&mut self) {
		if self.state != PlaybackState::Running {
			return;
		}
		let Some(session) = self.session.as_mut() else {
			return;
		};
		if let Some(stale) = session.pending.take() {
			self.scheduler.cancel(stale);
		}
		let tick = Tick {
			session: session.id,
			seq: session.next_seq,
		};
		session.next_seq += 1;
		session.pending = Some(tick);
		self.scheduler.schedule(tick, self.delay_ms);
	}

	fn cancel_pending(&mut self) {
		if let Some(tick) = self.session.as_mut().and_then(|s| s.pending.take()) {
			self.scheduler.cancel(tick);
		}
	}

	fn finish(&mut self) {
		self.cancel_pending();
		if let Some(outcome) = self.session.as_ref().and_then(Session::outcome) {
			info!("bfs: finished with {outcome:?}");
		}
		self.set_state(PlaybackState::Finished);
	}

	fn teardown(&mut self) {
		self.cancel_pending();
		self.session = None;
	}

	fn set_state(&mut self, state: PlaybackState) {
		self.state = state;
		let status = self.status();
		for observer in &mut self.observers {
			observer.on_state(state, status);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::bfs::graph::Edge;
	use crate::bfs::schedule::ManualScheduler;
	use crate::bfs::step::StepKind;
	use crate::bfs::visual::NodeVisual;

	#[derive(Clone, Debug, PartialEq)]
	enum Seen {
		Start(u64),
		Step(usize, StepKind, bool),
		State(PlaybackState, SearchStatus),
		Reset,
	}

	#[derive(Clone, Default)]
	struct Recorder(Rc<RefCell<Vec<Seen>>>);

	impl Recorder {
		fn steps(&self) -> Vec<usize> {
			self.0
				.borrow()
				.iter()
				.filter_map(|s| match s {
					Seen::Step(i, ..) => Some(*i),
					_ => None,
				})
				.collect()
		}
	}

	impl PlaybackObserver for Recorder {
		fn on_start(&mut self, session: &Session) {
			self.0.borrow_mut().push(Seen::Start(session.id()));
		}
		fn on_step(&mut self, event: &StepApplied<'_>) {
			self.0
				.borrow_mut()
				.push(Seen::Step(event.index, event.step.kind(), event.is_terminal));
		}
		fn on_state(&mut self, state: PlaybackState, status: SearchStatus) {
			self.0.borrow_mut().push(Seen::State(state, status));
		}
		fn on_reset(&mut self) {
			self.0.borrow_mut().push(Seen::Reset);
		}
	}

	fn chain(n: usize) -> Graph {
		let edges: Vec<Edge> = (1..n).map(|i| Edge::new(i - 1, i)).collect();
		Graph::from_edges(n, &edges).unwrap()
	}

	fn controller() -> (Controller<ManualScheduler>, Recorder) {
		let recorder = Recorder::default();
		let mut controller = Controller::new(ManualScheduler::new(), DEFAULT_DELAY_MS);
		controller.subscribe(Box::new(recorder.clone()));
		(controller, recorder)
	}

	fn fire(controller: &mut Controller<ManualScheduler>, times: usize) {
		for _ in 0..times {
			let tick = controller.scheduler_mut().pop().unwrap();
			controller.on_tick(tick);
		}
	}

	fn drain(controller: &mut Controller<ManualScheduler>) {
		while let Some(tick) = controller.scheduler_mut().pop() {
			controller.on_tick(tick);
		}
	}

	#[test]
	fn chain_playback_ends_on_path() {
		let (mut c, rec) = controller();
		c.start(&chain(3), 0, Some(2), 0).unwrap();
		assert_eq!(c.state(), PlaybackState::Running);
		assert_eq!(c.scheduler().pending_len(), 1);
		drain(&mut c);

		assert_eq!(c.state(), PlaybackState::Finished);
		assert_eq!(c.status(), SearchStatus::Done);
		let session = c.session().unwrap();
		assert_eq!(
			session.visual().nodes(),
			&[NodeVisual::Start, NodeVisual::Path, NodeVisual::End]
		);
		assert_eq!(session.outcome(), Some(&Outcome::PathFound(vec![0, 1, 2])));
		assert_eq!(rec.steps(), (0..session.total()).collect::<Vec<_>>());
		assert_eq!(
			rec.0.borrow().last(),
			Some(&Seen::State(PlaybackState::Finished, SearchStatus::Done))
		);
		assert_eq!(c.scheduler().pending_len(), 0);
	}

	#[test]
	fn start_is_rejected_while_running_or_paused() {
		let (mut c, _) = controller();
		c.start(&chain(3), 0, None, 10).unwrap();
		assert_eq!(
			c.start(&chain(3), 1, None, 10),
			Err(PlaybackError::AlreadyRunning)
		);
		assert_eq!(c.session().unwrap().start(), 0);
		assert!(c.pause());
		assert_eq!(
			c.start(&chain(3), 1, None, 10),
			Err(PlaybackError::AlreadyRunning)
		);
		assert_eq!(c.state(), PlaybackState::Paused);
	}

	#[test]
	fn invalid_identifiers_leave_state_untouched() {
		let (mut c, rec) = controller();
		assert_eq!(
			c.start(&chain(3), 3, None, 0),
			Err(PlaybackError::InvalidStart {
				node: 3,
				node_count: 3
			})
		);
		assert_eq!(
			c.start(&chain(3), 0, Some(5), 0),
			Err(PlaybackError::InvalidGoal {
				node: 5,
				node_count: 3
			})
		);
		assert_eq!(c.state(), PlaybackState::Idle);
		assert!(c.session().is_none());
		assert!(rec.0.borrow().is_empty());
		assert_eq!(
			PlaybackError::InvalidGoal {
				node: 5,
				node_count: 3
			}
			.to_string(),
			"goal node must be between 0 and 2, got 5"
		);
	}

	#[test]
	fn pause_and_resume_continue_at_next_step() {
		let (mut c, rec) = controller();
		c.start(&chain(5), 0, None, 50).unwrap();
		fire(&mut c, 3);
		assert!(c.pause());
		assert_eq!(c.scheduler().pending_len(), 0);
		assert_eq!(c.status(), SearchStatus::Paused);

		let session = c.session().unwrap();
		let mut expected = VisualState::new(5, 0, None);
		for step in &session.steps()[..3] {
			expected.apply(step);
		}
		assert_eq!(session.visual(), &expected);

		c.play_one_step();
		let session = c.session().unwrap();
		assert_eq!(session.index(), 3);
		assert_eq!(session.visual(), &expected);

		c.set_delay(120);
		assert!(c.resume());
		assert_eq!(
			c.scheduler().pending().map(|(_, d)| *d).collect::<Vec<_>>(),
			vec![120]
		);
		drain(&mut c);
		let total = c.session().unwrap().total();
		assert_eq!(rec.steps(), (0..total).collect::<Vec<_>>());
		assert_eq!(
			c.session().unwrap().outcome(),
			Some(&Outcome::Traversed { visited: 5 })
		);
	}

	#[test]
	fn stale_tick_after_pause_is_ignored() {
		let (mut c, rec) = controller();
		c.start(&chain(3), 0, None, 0).unwrap();
		let stale = c.session().unwrap().pending().unwrap();
		c.pause();
		c.on_tick(stale);
		assert!(rec.steps().is_empty());
		c.resume();
		c.on_tick(stale);
		assert!(rec.steps().is_empty());
	}

	#[test]
	fn reset_cancels_pending_tick() {
		let (mut c, rec) = controller();
		c.start(&chain(3), 0, Some(2), 0).unwrap();
		fire(&mut c, 1);
		let stale = c.session().unwrap().pending().unwrap();
		c.reset();

		assert_eq!(c.state(), PlaybackState::Idle);
		assert!(c.session().is_none());
		assert_eq!(c.scheduler().cancelled(), &[stale]);
		assert_eq!(c.scheduler().pending_len(), 0);

		let before = rec.0.borrow().len();
		c.on_tick(stale);
		assert_eq!(rec.0.borrow().len(), before);
		assert!(rec.0.borrow().contains(&Seen::Reset));
	}

	#[test]
	fn old_session_tick_cannot_drive_new_session() {
		let (mut c, rec) = controller();
		c.start(&chain(3), 0, None, 0).unwrap();
		let old = c.session().unwrap().pending().unwrap();
		c.reset();
		c.start(&chain(3), 2, None, 0).unwrap();
		c.on_tick(old);
		assert_eq!(c.session().unwrap().index(), 0);
		assert_eq!(rec.steps(), Vec::<usize>::new());
		assert_eq!(
			rec.0.borrow().iter().filter(|s| matches!(s, Seen::Start(_))).count(),
			2
		);
	}

	#[test]
	fn unreachable_goal_reports_no_path() {
		let graph = Graph::from_edges(4, &[Edge::new(0, 1), Edge::new(2, 3)]).unwrap();
		let (mut c, _) = controller();
		c.start(&graph, 0, Some(3), 0).unwrap();
		drain(&mut c);
		assert_eq!(c.status(), SearchStatus::NoPath);
		assert_eq!(
			c.session().unwrap().outcome(),
			Some(&Outcome::NoPath { goal: 3 })
		);
	}

	#[test]
	fn finished_session_can_be_restarted() {
		let (mut c, _) = controller();
		c.start(&chain(2), 0, None, 0).unwrap();
		drain(&mut c);
		assert_eq!(c.state(), PlaybackState::Finished);
		c.start(&chain(2), 1, Some(0), 0).unwrap();
		assert_eq!(c.session().unwrap().id(), 2);
		drain(&mut c);
		assert_eq!(
			c.session().unwrap().outcome(),
			Some(&Outcome::PathFound(vec![1, 0]))
		);
	}

	#[test]
	fn toggle_pause_is_noop_when_idle() {
		let (mut c, _) = controller();
		assert!(!c.toggle_pause());
		assert!(!c.resume());
		c.play_one_step();
		assert_eq!(c.state(), PlaybackState::Idle);
	}
}
