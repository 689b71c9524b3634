//! Breadth-first search step generation.
//!
//! [`generate_steps`] runs the whole traversal up front and records every
//! micro-event as a [`Step`]. Each step owns copies of the queue, visited list
//! and parent map as they were when it was emitted, so any step can be
//! rendered or inspected on its own, in any order.

use std::collections::{BTreeMap, HashSet, VecDeque};

use super::graph::{Graph, NodeId};

/// Parent pointers recorded while enqueueing. The start node maps to `None`.
pub type ParentMap = BTreeMap<NodeId, Option<NodeId>>;

/// Discriminant of a [`Step`], handy for matching without the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
	Start,
	Visit,
	Goal,
	AlreadyVisited,
	Enqueue,
	Path,
	Done,
}

/// One observable event in a traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
	/// The queue has been seeded with the start node.
	Start { node: NodeId, queue: Vec<NodeId> },
	/// `node` was dequeued and marked visited.
	Visit {
		node: NodeId,
		queue: Vec<NodeId>,
		visited: Vec<NodeId>,
		parent: ParentMap,
	},
	/// Like [`Step::Visit`], for the goal node.
	Goal {
		node: NodeId,
		queue: Vec<NodeId>,
		visited: Vec<NodeId>,
		parent: ParentMap,
	},
	/// `node` was dequeued a second time and skipped.
	AlreadyVisited {
		node: NodeId,
		queue: Vec<NodeId>,
		visited: Vec<NodeId>,
	},
	/// The unvisited neighbors of `node` were pushed onto the queue.
	Enqueue {
		node: NodeId,
		queue: Vec<NodeId>,
		visited: Vec<NodeId>,
	},
	/// Shortest path from start to goal, in walk order.
	Path {
		node: NodeId,
		path: Vec<NodeId>,
		queue: Vec<NodeId>,
		visited: Vec<NodeId>,
	},
	/// The queue ran dry without reaching a goal.
	Done { visited: Vec<NodeId> },
}

impl Step {
	pub fn kind(&self) -> StepKind {
		match self {
			Step::Start { .. } => StepKind::Start,
			Step::Visit { .. } => StepKind::Visit,
			Step::Goal { .. } => StepKind::Goal,
			Step::AlreadyVisited { .. } => StepKind::AlreadyVisited,
			Step::Enqueue { .. } => StepKind::Enqueue,
			Step::Path { .. } => StepKind::Path,
			Step::Done { .. } => StepKind::Done,
		}
	}

	/// The node the step is about. `Done` has none.
	pub fn node(&self) -> Option<NodeId> {
		match self {
			Step::Start { node, .. }
			| Step::Visit { node, .. }
			| Step::Goal { node, .. }
			| Step::AlreadyVisited { node, .. }
			| Step::Enqueue { node, .. }
			| Step::Path { node, .. } => Some(*node),
			Step::Done { .. } => None,
		}
	}

	/// Queue snapshot carried by the step (empty for `Done`).
	pub fn queue(&self) -> &[NodeId] {
		match self {
			Step::Start { queue, .. }
			| Step::Visit { queue, .. }
			| Step::Goal { queue, .. }
			| Step::AlreadyVisited { queue, .. }
			| Step::Enqueue { queue, .. }
			| Step::Path { queue, .. } => queue,
			Step::Done { .. } => &[],
		}
	}

	/// Visited snapshot carried by the step, in visit order.
	pub fn visited(&self) -> &[NodeId] {
		match self {
			Step::Start { .. } => &[],
			Step::Visit { visited, .. }
			| Step::Goal { visited, .. }
			| Step::AlreadyVisited { visited, .. }
			| Step::Enqueue { visited, .. }
			| Step::Path { visited, .. }
			| Step::Done { visited } => visited,
		}
	}

	/// `Path` and `Done` end playback.
	pub fn is_terminal(&self) -> bool {
		matches!(self, Step::Path { .. } | Step::Done { .. })
	}
}

/// Internal traversal state; snapshots are cloned out of it.
struct Frontier {
	queue: VecDeque<NodeId>,
	visited: Vec<NodeId>,
	seen: HashSet<NodeId>,
	parent: ParentMap,
}

impl Frontier {
	fn new(start: NodeId) -> Self {
		Self {
			queue: VecDeque::from([start]),
			visited: Vec::new(),
			seen: HashSet::new(),
			parent: ParentMap::from([(start, None)]),
		}
	}

	fn queue(&self) -> Vec<NodeId> {
		self.queue.iter().copied().collect()
	}

	fn visited(&self) -> Vec<NodeId> {
		self.visited.clone()
	}

	/// Walk parent pointers from `goal` back to the root and return the
	/// path in start-to-goal order.
	///
	/// # Panics
	///
	/// If the chain has a missing link or loops. Both mean the traversal
	/// recorded inconsistent parents.
	fn path_to(&self, goal: NodeId) -> Vec<NodeId> {
		let mut path = vec![goal];
		let mut current = goal;
		loop {
			match self.parent.get(&current) {
				Some(Some(prev)) => {
					current = *prev;
					path.push(current);
					assert!(
						path.len() <= self.parent.len(),
						"parent chain from node {goal} loops"
					);
				}
				Some(None) => break,
				None => panic!("parent chain from node {goal} breaks at node {current}"),
			}
		}
		path.reverse();
		path
	}
}

/// Run a breadth-first search from `start` and record every step.
///
/// With a `goal` the trace ends with [`Step::Path`] as soon as the goal is
/// dequeued; otherwise, or if the goal is unreachable, it ends with
/// [`Step::Done`]. Neighbors are expanded in ascending order, and a neighbor
/// is only enqueued when it is neither visited nor already queued.
pub fn generate_steps(graph: &Graph, start: NodeId, goal: Option<NodeId>) -> Vec<Step> {
	let mut steps = Vec::new();
	let mut state = Frontier::new(start);

	steps.push(Step::Start {
		node: start,
		queue: state.queue(),
	});

	while let Some(vertex) = state.queue.pop_front() {
		// Unreachable for simple graphs since enqueueing already skips queued
		// nodes; kept so inputs with repeated neighbors still trace cleanly.
		if state.seen.contains(&vertex) {
			steps.push(Step::AlreadyVisited {
				node: vertex,
				queue: state.queue(),
				visited: state.visited(),
			});
			continue;
		}
		state.seen.insert(vertex);
		state.visited.push(vertex);

		let is_goal = goal == Some(vertex);
		let (queue, visited, parent) = (state.queue(), state.visited(), state.parent.clone());
		steps.push(if is_goal {
			Step::Goal {
				node: vertex,
				queue,
				visited,
				parent,
			}
		} else {
			Step::Visit {
				node: vertex,
				queue,
				visited,
				parent,
			}
		});

		if is_goal {
			steps.push(Step::Path {
				node: vertex,
				path: state.path_to(vertex),
				queue: state.queue(),
				visited: state.visited(),
			});
			return steps;
		}

		let mut neighbors = graph.neighbors(vertex).to_vec();
		neighbors.sort_unstable();
		for neighbor in neighbors {
			if !state.seen.contains(&neighbor) && !state.queue.contains(&neighbor) {
				state.queue.push_back(neighbor);
				state.parent.insert(neighbor, Some(vertex));
			}
		}
		steps.push(Step::Enqueue {
			node: vertex,
			queue: state.queue(),
			visited: state.visited(),
		});
	}

	steps.push(Step::Done {
		visited: state.visited(),
	});
	steps
}
