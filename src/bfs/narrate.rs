//! Human-readable log lines for applied steps.

use super::graph::NodeId;
use super::step::Step;

/// Styling hint for a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
	Info,
	Current,
	Muted,
	Goal,
	Path,
	NoPath,
}

impl LogKind {
	pub fn class(self) -> &'static str {
		match self {
			LogKind::Info => "log-info",
			LogKind::Current => "log-current",
			LogKind::Muted => "log-muted",
			LogKind::Goal => "log-goal",
			LogKind::Path => "log-path",
			LogKind::NoPath => "log-nopath",
		}
	}
}

/// One rendered line of the traversal log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
	pub kind: LogKind,
	pub text: String,
}

impl LogEntry {
	pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
		Self {
			kind,
			text: text.into(),
		}
	}
}

/// Join nodes with `sep`, e.g. `[0, 1, 2]` → `"0, 1, 2"`.
pub fn join_nodes(nodes: &[NodeId], sep: &str) -> String {
	nodes
		.iter()
		.map(NodeId::to_string)
		.collect::<Vec<_>>()
		.join(sep)
}

/// Opening line for a run.
pub fn announce(start: NodeId, goal: Option<NodeId>) -> LogEntry {
	let text = match goal {
		Some(goal) => format!("BFS starting from node {start} → Goal: {goal}"),
		None => format!("BFS starting from node {start} (full traversal)"),
	};
	LogEntry::new(LogKind::Info, text)
}

/// Describe a step. `goal` distinguishes "no path" from a plain traversal
/// when the trace ends with `Done`.
pub fn narrate(step: &Step, goal: Option<NodeId>) -> LogEntry {
	match step {
		Step::Start { queue, .. } => LogEntry::new(
			LogKind::Info,
			format!("↳ Queue initialized: [{}]", join_nodes(queue, ", ")),
		),
		Step::Visit { node, queue, .. } => LogEntry::new(
			LogKind::Current,
			format!("▶ Visiting node {node}  Queue: [{}]", join_nodes(queue, ", ")),
		),
		Step::Goal { node, .. } => {
			LogEntry::new(LogKind::Goal, format!("🎯 Goal node {node} reached!"))
		}
		Step::AlreadyVisited { node, .. } => LogEntry::new(
			LogKind::Muted,
			format!("  Node {node} already visited, skipping"),
		),
		Step::Enqueue { queue, .. } => LogEntry::new(
			LogKind::Muted,
			format!("  Neighbors enqueued. Queue → [{}]", join_nodes(queue, ", ")),
		),
		Step::Path { path, .. } => LogEntry::new(
			LogKind::Path,
			format!("✓ Shortest path: {}", join_nodes(path, " → ")),
		),
		Step::Done { visited } => match goal {
			Some(goal) => LogEntry::new(
				LogKind::NoPath,
				format!(
					"✗ No path to node {goal}. {} nodes visited.",
					visited.len()
				),
			),
			None => LogEntry::new(
				LogKind::Info,
				format!(
					"✓ Full traversal complete. {} nodes visited.",
					visited.len()
				),
			),
		},
	}
}
