use std::cell::RefCell;
use std::rc::Rc;

use bfs_stepper::bfs::{
	Controller, EdgeList, GraphError, ManualScheduler, Outcome, PlaybackError, PlaybackObserver,
	PlaybackState, SearchStatus, Session, StepApplied, announce, narrate,
};

/// Collects the narration a user would see in the log panel.
#[derive(Clone, Default)]
struct Transcript {
	lines: Rc<RefCell<Vec<String>>>,
	goal: Rc<RefCell<Option<usize>>>,
}

impl Transcript {
	fn lines(&self) -> Vec<String> {
		self.lines.borrow().clone()
	}
}

impl PlaybackObserver for Transcript {
	fn on_start(&mut self, session: &Session) {
		*self.goal.borrow_mut() = session.goal();
		*self.lines.borrow_mut() = vec![announce(session.start(), session.goal()).text];
	}

	fn on_step(&mut self, event: &StepApplied<'_>) {
		let entry = narrate(event.step, *self.goal.borrow());
		self.lines.borrow_mut().push(entry.text);
	}

	fn on_reset(&mut self) {
		self.lines.borrow_mut().clear();
	}
}

fn edges(node_count: usize, pairs: &[(usize, usize)]) -> EdgeList {
	let mut list = EdgeList::new(node_count);
	for &(a, b) in pairs {
		list.add(a, b).unwrap();
	}
	list
}

fn controller() -> (Controller<ManualScheduler>, Transcript) {
	let transcript = Transcript::default();
	let mut controller = Controller::new(ManualScheduler::new(), 700);
	controller.subscribe(Box::new(transcript.clone()));
	(controller, transcript)
}

fn drain(controller: &mut Controller<ManualScheduler>) {
	while let Some(tick) = controller.scheduler_mut().pop() {
		controller.on_tick(tick);
	}
}

const CHAIN_TRANSCRIPT: [&str; 8] = [
	"BFS starting from node 0 → Goal: 2",
	"↳ Queue initialized: [0]",
	"▶ Visiting node 0  Queue: []",
	"  Neighbors enqueued. Queue → [1]",
	"▶ Visiting node 1  Queue: []",
	"  Neighbors enqueued. Queue → [2]",
	"🎯 Goal node 2 reached!",
	"✓ Shortest path: 0 → 1 → 2",
];

#[test]
fn chain_is_narrated_step_by_step() {
	let (mut controller, transcript) = controller();
	let graph = edges(3, &[(0, 1), (1, 2)]).to_graph();
	controller.start(&graph, 0, Some(2), 700).unwrap();
	drain(&mut controller);

	assert_eq!(transcript.lines(), CHAIN_TRANSCRIPT);
	assert_eq!(controller.state(), PlaybackState::Finished);
	assert_eq!(controller.status(), SearchStatus::Done);
	assert_eq!(
		controller.session().and_then(Session::outcome),
		Some(&Outcome::PathFound(vec![0, 1, 2]))
	);
}

#[test]
fn pausing_does_not_change_the_narration() {
	let (mut controller, transcript) = controller();
	let graph = edges(3, &[(0, 1), (1, 2)]).to_graph();
	controller.start(&graph, 0, Some(2), 700).unwrap();

	for _ in 0..3 {
		let tick = controller.scheduler_mut().pop().unwrap();
		controller.on_tick(tick);
	}
	assert!(controller.pause());
	assert_eq!(controller.status(), SearchStatus::Paused);
	assert_eq!(controller.scheduler().pending_len(), 0);

	// A second click while paused must not start a second run.
	assert_eq!(
		controller.start(&graph, 0, Some(2), 700),
		Err(PlaybackError::AlreadyRunning)
	);

	assert!(controller.resume());
	drain(&mut controller);
	assert_eq!(transcript.lines(), CHAIN_TRANSCRIPT);
}

#[test]
fn reset_silences_the_old_run() {
	let (mut controller, transcript) = controller();
	let graph = edges(3, &[(0, 1), (1, 2)]).to_graph();
	controller.start(&graph, 0, Some(2), 700).unwrap();
	let tick = controller.scheduler_mut().pop().unwrap();
	controller.on_tick(tick);
	let stale = controller.session().and_then(Session::pending).unwrap();

	controller.reset();
	assert_eq!(controller.state(), PlaybackState::Idle);
	assert!(transcript.lines().is_empty());

	controller.on_tick(stale);
	assert!(transcript.lines().is_empty());
	assert!(controller.session().is_none());

	controller.start(&graph, 2, None, 700).unwrap();
	drain(&mut controller);
	assert_eq!(
		transcript.lines().last().map(String::as_str),
		Some("✓ Full traversal complete. 3 nodes visited.")
	);
}

#[test]
fn unreachable_goal_reports_no_path() {
	let (mut controller, transcript) = controller();
	let graph = edges(4, &[(0, 1), (2, 3)]).to_graph();
	controller.start(&graph, 0, Some(3), 100).unwrap();
	drain(&mut controller);

	assert_eq!(controller.status(), SearchStatus::NoPath);
	assert_eq!(
		transcript.lines().last().map(String::as_str),
		Some("✗ No path to node 3. 2 nodes visited.")
	);
}

#[test]
fn bad_input_is_rejected_before_playback() {
	let mut list = EdgeList::new(3);
	assert_eq!(list.add(1, 1), Err(GraphError::SelfLoop(1)));
	list.add(0, 1).unwrap();
	assert!(matches!(list.add(1, 0), Err(GraphError::DuplicateEdge { .. })));
	assert_eq!(list.len(), 1);

	let (mut controller, transcript) = controller();
	let err = controller.start(&list.to_graph(), 0, Some(5), 700).unwrap_err();
	assert_eq!(err.to_string(), "goal node must be between 0 and 2, got 5");
	assert_eq!(controller.state(), PlaybackState::Idle);
	assert!(transcript.lines().is_empty());
}
