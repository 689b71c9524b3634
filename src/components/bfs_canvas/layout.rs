//! Node placement for the traversal canvas.
//!
//! Wraps the `force_graph` physics simulation: nodes start on a circle,
//! repel each other and are pulled together along edges. A short warm-up
//! settles the layout before the first frame; afterwards the simulation keeps
//! running so dragged nodes ease their neighbors into place.

use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::bfs::{Graph, NodeId};

/// Margin kept between node centers and the canvas border.
const PADDING: f64 = 38.0;
/// Simulation steps run before the first frame.
const WARMUP_ITERATIONS: usize = 240;
/// Fixed simulation step, in seconds.
pub const FRAME_DT: f32 = 0.016;

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: NodeId,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Positions of every node plus interaction state.
///
/// Rebuilt whenever the graph shape changes; playback only changes colors,
/// so it never touches the layout.
pub struct GraphLayout {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	node_count: usize,
	edges: Vec<(NodeId, NodeId)>,
}

impl GraphLayout {
	pub fn new(graph: &Graph, width: f64, height: f64) -> Self {
		let mut sim = ForceGraph::new(SimulationParameters {
			force_charge: 1500.0,
			force_spring: 0.08,
			force_max: 200.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let n = graph.node_count().max(1);
		let radius = (width.min(height) / 2.0 - PADDING).max(PADDING);
		let mut indices = Vec::with_capacity(n);
		for id in 0..graph.node_count() {
			let angle = (id as f64) * 2.0 * PI / n as f64 - PI / 2.0;
			let (x, y) = (
				(width / 2.0 + radius * angle.cos()) as f32,
				(height / 2.0 + radius * angle.sin()) as f32,
			);
			let idx = sim.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo { id },
			});
			indices.push(idx);
		}

		let edges: Vec<(NodeId, NodeId)> = graph.edges().iter().map(|e| (e.a, e.b)).collect();
		for &(a, b) in &edges {
			sim.add_edge(indices[a], indices[b], EdgeData::default());
		}

		let mut layout = Self {
			graph: sim,
			drag: DragState::default(),
			width,
			height,
			node_count: graph.node_count(),
			edges,
		};
		for _ in 0..WARMUP_ITERATIONS {
			layout.tick(FRAME_DT);
		}
		layout
	}

	/// Undirected edges of the laid-out graph.
	pub fn edges(&self) -> &[(NodeId, NodeId)] {
		&self.edges
	}

	/// Advance the simulation and keep every node inside the canvas.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let (max_x, max_y) = (
			(self.width - PADDING).max(PADDING) as f32,
			(self.height - PADDING).max(PADDING) as f32,
		);
		let min = PADDING as f32;
		self.graph.visit_nodes_mut(|node| {
			node.data.x = node.data.x.clamp(min, max_x);
			node.data.y = node.data.y.clamp(min, max_y);
		});
	}

	/// Current position of every node, indexed by node id.
	pub fn positions(&self) -> Vec<(f64, f64)> {
		let mut out = vec![(0.0, 0.0); self.node_count];
		self.graph.visit_nodes(|node| {
			if let Some(slot) = out.get_mut(node.data.user_data.id) {
				*slot = (node.x() as f64, node.y() as f64);
			}
		});
		out
	}

	/// Node under the canvas point `(x, y)`, if any.
	pub fn node_at(&self, x: f64, y: f64, hit_radius: f64) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Start dragging the node under `(x, y)`. Returns false if there is none.
	pub fn begin_drag(&mut self, x: f64, y: f64, hit_radius: f64) -> bool {
		let Some(idx) = self.node_at(x, y, hit_radius) else {
			return false;
		};
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			..DragState::default()
		};
		let drag = &mut self.drag;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				drag.node_start_x = node.x();
				drag.node_start_y = node.y();
			}
		});
		true
	}

	/// Move the dragged node with the pointer. Dragged nodes stay anchored.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		let (true, Some(idx)) = (self.drag.active, self.drag.node_idx) else {
			return;
		};
		let (nx, ny) = (
			self.drag.node_start_x + (x - self.drag.start_x) as f32,
			self.drag.node_start_y + (y - self.drag.start_y) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	pub fn end_drag(&mut self) {
		self.drag = DragState::default();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bfs::Edge;

	fn layout() -> GraphLayout {
		let graph = Graph::from_edges(4, &[Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]).unwrap();
		GraphLayout::new(&graph, 600.0, 400.0)
	}

	#[test]
	fn nodes_stay_inside_canvas() {
		let layout = layout();
		let positions = layout.positions();
		assert_eq!(positions.len(), 4);
		for (x, y) in positions {
			assert!((PADDING - 0.5..=600.0 - PADDING + 0.5).contains(&x), "x = {x}");
			assert!((PADDING - 0.5..=400.0 - PADDING + 0.5).contains(&y), "y = {y}");
		}
		assert_eq!(layout.edges(), &[(0, 1), (1, 2), (2, 3)]);
	}

	#[test]
	fn isolated_nodes_keep_their_own_slot() {
		let graph = Graph::from_edges(5, &[Edge::new(3, 4)]).unwrap();
		let layout = GraphLayout::new(&graph, 600.0, 400.0);
		let positions = layout.positions();
		assert_eq!(positions.len(), 5);
		// An unfilled slot would still sit at the origin, outside the padding.
		for (x, y) in positions {
			assert!(x >= PADDING - 0.5 && y >= PADDING - 0.5, "({x}, {y})");
		}
	}

	#[test]
	fn drag_moves_and_anchors_node() {
		let mut layout = layout();
		let (x, y) = layout.positions()[2];
		assert!(layout.begin_drag(x, y, 5.0));
		layout.drag_to(x + 10.0, y + 5.0);
		let (nx, ny) = layout.positions()[2];
		assert!((nx - (x + 10.0)).abs() < 0.01);
		assert!((ny - (y + 5.0)).abs() < 0.01);
		layout.end_drag();
		assert!(!layout.drag.active);
		assert!(!layout.begin_drag(-500.0, -500.0, 5.0));
	}
}
