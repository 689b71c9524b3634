//! Application state shared by the panels.
//!
//! [`AppState`] is a bundle of reactive handles, so it is `Copy` and can be
//! passed to every component. The playback controller lives behind a
//! local stored value; only event handlers reach into it.

use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};

use crate::bfs::{
	EdgeList, LogEntry, LogKind, NodeId, PlaybackObserver, PlaybackState, SearchStatus, Session,
	StepApplied, Step, VisualState, announce, narrate, parse_node, preset,
};
use crate::config::{AppConfig, MAX_DELAY_MS, MIN_DELAY_MS};
use crate::timer::{SharedController, WebScheduler};

/// How long validation messages stay on screen.
const ALERT_TTL: Duration = Duration::from_millis(2500);

/// A transient validation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
	pub id: u64,
	pub message: String,
}

/// Reactive mirror of the playback session, written only by the controller.
#[derive(Clone, Copy)]
pub struct PlaybackView {
	pub visual: RwSignal<Option<VisualState>>,
	pub state: RwSignal<PlaybackState>,
	pub status: RwSignal<SearchStatus>,
	/// `(applied, total)` steps, `None` when idle.
	pub counter: RwSignal<Option<(usize, usize)>>,
	pub log: RwSignal<Vec<LogEntry>>,
	pub visited: RwSignal<Vec<NodeId>>,
	pub path: RwSignal<Option<Vec<NodeId>>>,
	goal: RwSignal<Option<NodeId>>,
}

impl PlaybackView {
	fn new() -> Self {
		Self {
			visual: RwSignal::new(None),
			state: RwSignal::new(PlaybackState::Idle),
			status: RwSignal::new(SearchStatus::Idle),
			counter: RwSignal::new(None),
			log: RwSignal::new(vec![LogEntry::new(
				LogKind::Info,
				"Configure your graph and press Run BFS to start.",
			)]),
			visited: RwSignal::new(Vec::new()),
			path: RwSignal::new(None),
			goal: RwSignal::new(None),
		}
	}

	pub fn push_log(&self, entry: LogEntry) {
		self.log.update(|log| log.push(entry));
	}

	pub fn clear_log(&self) {
		self.log.set(Vec::new());
	}
}

impl PlaybackObserver for PlaybackView {
	fn on_start(&mut self, session: &Session) {
		self.goal.set(session.goal());
		self.visual.set(Some(session.visual().clone()));
		self.counter.set(Some((0, session.total())));
		self.visited.set(Vec::new());
		self.path.set(None);
		self.log.set(vec![announce(session.start(), session.goal())]);
	}

	fn on_step(&mut self, event: &StepApplied<'_>) {
		self.visual.set(Some(event.visual.clone()));
		self.counter.set(Some((event.index + 1, event.total)));
		self.visited.set(event.step.visited().to_vec());
		if let Step::Path { path, .. } = event.step {
			self.path.set(Some(path.clone()));
		}
		self.push_log(narrate(event.step, self.goal.get_untracked()));
	}

	fn on_state(&mut self, state: PlaybackState, status: SearchStatus) {
		self.state.set(state);
		self.status.set(status);
	}

	fn on_reset(&mut self) {
		self.goal.set(None);
		self.visual.set(None);
		self.counter.set(None);
		self.visited.set(Vec::new());
		self.path.set(None);
		self.log.set(vec![LogEntry::new(
			LogKind::Info,
			"Graph reset. Configure and press Run BFS.",
		)]);
	}
}

/// Everything the panels read and the actions they trigger.
#[derive(Clone, Copy)]
pub struct AppState {
	controller: StoredValue<SharedController, LocalStorage>,
	pub edges: RwSignal<EdgeList>,
	pub start_text: RwSignal<String>,
	pub goal_text: RwSignal<String>,
	pub delay_ms: RwSignal<u32>,
	pub alert: RwSignal<Option<Alert>>,
	pub playback: PlaybackView,
}

impl AppState {
	pub fn new(config: &AppConfig) -> Self {
		let edges = config.edge_list().unwrap_or_else(|e| {
			warn!("bfs-stepper: ignoring configured edges: {}", e);
			EdgeList::new(config.node_count)
		});
		let playback = PlaybackView::new();
		let controller = WebScheduler::controller(config.delay_ms);
		controller.borrow_mut().subscribe(Box::new(playback));

		Self {
			controller: StoredValue::new_local(controller),
			edges: RwSignal::new(edges),
			start_text: RwSignal::new(config.start.to_string()),
			goal_text: RwSignal::new(config.goal.map(|g| g.to_string()).unwrap_or_default()),
			delay_ms: RwSignal::new(config.delay_ms),
			alert: RwSignal::new(None),
			playback,
		}
	}

	/// True while a run is playing or paused; the graph is frozen meanwhile.
	pub fn busy(&self) -> bool {
		matches!(
			self.playback.state.get(),
			PlaybackState::Running | PlaybackState::Paused
		)
	}

	pub fn show_alert(&self, message: impl Into<String>) {
		let id = self.alert.with_untracked(|a| a.as_ref().map_or(0, |a| a.id + 1));
		let message = message.into();
		warn!("bfs-stepper: {}", message);
		self.alert.set(Some(Alert { id, message }));
		let alert = self.alert;
		set_timeout(
			move || {
				if alert.with_untracked(|a| a.as_ref().is_some_and(|a| a.id == id)) {
					alert.set(None);
				}
			},
			ALERT_TTL,
		);
	}

	/// Validate inputs, then start a run on the current edge list.
	pub fn run(&self) {
		let edges = self.edges.get_untracked();
		let n = edges.node_count();
		let start = match parse_node(&self.start_text.get_untracked(), n) {
			Ok(start) => start,
			Err(e) => return self.show_alert(format!("Start node: {e}")),
		};
		let goal_text = self.goal_text.get_untracked();
		let goal = if goal_text.trim().is_empty() {
			None
		} else {
			match parse_node(&goal_text, n) {
				Ok(goal) => Some(goal),
				Err(e) => return self.show_alert(format!("Goal node: {e}")),
			}
		};

		let graph = edges.to_graph();
		let delay = self.delay_ms.get_untracked();
		let started = self
			.controller
			.with_value(|c| c.borrow_mut().start(&graph, start, goal, delay));
		if let Err(e) = started {
			self.show_alert(e.to_string());
		}
	}

	pub fn toggle_pause(&self) {
		self.controller.with_value(|c| {
			c.borrow_mut().toggle_pause();
		});
	}

	pub fn reset(&self) {
		self.controller.with_value(|c| c.borrow_mut().reset());
	}

	/// Apply a new speed slider value to the next scheduled step.
	pub fn set_delay(&self, text: &str) {
		let Ok(delay) = text.trim().parse::<u32>() else {
			return;
		};
		let delay = delay.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
		self.delay_ms.set(delay);
		self.controller.with_value(|c| c.borrow_mut().set_delay(delay));
	}

	/// A finished run's colors no longer match an edited graph.
	fn before_edit(&self) {
		if self.playback.state.get_untracked() == PlaybackState::Finished {
			self.reset();
		}
	}

	/// Add an edge from the builder inputs. Returns true on success.
	///
	/// A rejected edge leaves the graph and any finished run untouched.
	pub fn add_edge(&self, from: &str, to: &str) -> bool {
		let next = self.edges.with_untracked(|edges| with_edge(edges, from, to));
		match next {
			Ok(next) => {
				self.before_edit();
				self.edges.set(next);
				true
			}
			Err(message) => {
				self.show_alert(message);
				false
			}
		}
	}

	pub fn remove_edge(&self, index: usize) {
		self.before_edit();
		self.edges.update(|edges| {
			edges.remove(index);
		});
	}

	/// Handle the node count input; invalid text is ignored.
	pub fn set_node_count(&self, text: &str) {
		let Ok(n) = text.trim().parse::<usize>() else {
			return;
		};
		let n = n.clamp(crate::bfs::MIN_NODES, crate::bfs::MAX_NODES);
		self.before_edit();
		self.edges.update(|edges| edges.set_node_count(n));
	}

	/// Replace the graph with a random connected example.
	pub fn load_preset(&self) {
		self.before_edit();
		let n = self.edges.with_untracked(EdgeList::node_count);
		let example = preset(n, js_sys::Math::random);
		info!(
			"bfs-stepper: example graph with {} nodes, {} edges",
			n,
			example.edges.len()
		);
		self.playback.push_log(LogEntry::new(
			LogKind::Info,
			format!(
				"Example graph loaded ({} nodes, {} edges). Start: {}, Goal: {}.",
				example.edges.node_count(),
				example.edges.len(),
				example.start,
				example.goal
			),
		));
		self.start_text.set(example.start.to_string());
		self.goal_text.set(example.goal.to_string());
		self.edges.set(example.edges);
	}
}

/// Copy of `edges` with the edge typed into the builder, or the alert text.
fn with_edge(edges: &EdgeList, from: &str, to: &str) -> Result<EdgeList, String> {
	let (from, to) = (from.trim(), to.trim());
	if from.is_empty() || to.is_empty() {
		return Err("Please enter both endpoints.".to_string());
	}
	let n = edges.node_count();
	let mut next = edges.clone();
	parse_node(from, n)
		.and_then(|a| parse_node(to, n).map(|b| (a, b)))
		.and_then(|(a, b)| next.add(a, b))
		.map_err(|e| capitalize(&e.to_string()))?;
	Ok(next)
}

fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
