//! Per-node visual state derived by folding applied steps.

use super::graph::NodeId;
use super::step::Step;

/// How a node should be drawn at a given point of playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeVisual {
	#[default]
	Default,
	Start,
	End,
	Current,
	Visited,
	Path,
}

impl NodeVisual {
	/// CSS-friendly name, also used as a class suffix by the panels.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeVisual::Default => "default",
			NodeVisual::Start => "start",
			NodeVisual::End => "end",
			NodeVisual::Current => "current",
			NodeVisual::Visited => "visited",
			NodeVisual::Path => "path",
		}
	}
}

/// Visual state of every node, plus the highlighted path edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisualState {
	nodes: Vec<NodeVisual>,
	start: NodeId,
	goal: Option<NodeId>,
	path_edges: Vec<(NodeId, NodeId)>,
}

impl VisualState {
	/// All nodes at default, except the start and goal markers.
	pub fn new(node_count: usize, start: NodeId, goal: Option<NodeId>) -> Self {
		let mut state = Self {
			nodes: vec![NodeVisual::Default; node_count],
			start,
			goal,
			path_edges: Vec::new(),
		};
		state.set(start, NodeVisual::Start);
		if let Some(goal) = goal {
			state.set(goal, NodeVisual::End);
		}
		state
	}

	pub fn nodes(&self) -> &[NodeVisual] {
		&self.nodes
	}

	pub fn get(&self, node: NodeId) -> NodeVisual {
		self.nodes.get(node).copied().unwrap_or_default()
	}

	/// Consecutive node pairs along the found path, empty until a path is applied.
	pub fn path_edges(&self) -> &[(NodeId, NodeId)] {
		&self.path_edges
	}

	/// True if `a`–`b` lies on the highlighted path, in either direction.
	pub fn is_path_edge(&self, a: NodeId, b: NodeId) -> bool {
		self.path_edges
			.iter()
			.any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
	}

	fn set(&mut self, node: NodeId, visual: NodeVisual) {
		if let Some(slot) = self.nodes.get_mut(node) {
			*slot = visual;
		}
	}

	/// Fold one step into the state.
	pub fn apply(&mut self, step: &Step) {
		match step {
			Step::Start { node, .. } => self.set(*node, NodeVisual::Start),
			Step::Visit { node, .. } | Step::Goal { node, .. } => {
				for slot in self.nodes.iter_mut() {
					if *slot == NodeVisual::Current {
						*slot = NodeVisual::Visited;
					}
				}
				self.set(*node, NodeVisual::Current);
			}
			Step::Path { path, .. } => {
				for &node in path {
					if node != self.start && Some(node) != self.goal {
						self.set(node, NodeVisual::Path);
					}
				}
				self.set(self.start, NodeVisual::Start);
				if let Some(goal) = self.goal {
					self.set(goal, NodeVisual::End);
				}
				self.path_edges = path.windows(2).map(|w| (w[0], w[1])).collect();
			}
			Step::Enqueue { .. } | Step::AlreadyVisited { .. } | Step::Done { .. } => {}
		}
	}
}
