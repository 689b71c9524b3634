//! Undirected simple graphs over dense node identifiers.
//!
//! Nodes are the integers `0..node_count`. Text coming from form inputs is
//! converted with [`parse_node`] at the boundary, so everything past this
//! module works with [`NodeId`] only.

use thiserror::Error;

/// Canonical node identifier.
pub type NodeId = usize;

/// Smallest node count the builder accepts.
pub const MIN_NODES: usize = 2;
/// Largest node count the builder accepts.
pub const MAX_NODES: usize = 15;

/// An undirected edge as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub a: NodeId,
	pub b: NodeId,
}

impl Edge {
	pub fn new(a: NodeId, b: NodeId) -> Self {
		Self { a, b }
	}

	/// True if both edges join the same pair of nodes, in either orientation.
	pub fn same_pair(&self, other: &Edge) -> bool {
		(self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
	}
}

/// Validation failures raised while building a graph or reading node inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// An input field was left empty.
	#[error("please enter a node")]
	MissingNode,
	/// An input could not be read as a node number.
	#[error("node labels must be numbers, got {0:?}")]
	NotANumber(String),
	/// A node lies outside `0..node_count`.
	#[error("node {node} is out of range, nodes must be between 0 and {max}")]
	NodeOutOfRange { node: NodeId, max: NodeId },
	/// Both endpoints of an edge are the same node.
	#[error("self-loops are not allowed (node {0})")]
	SelfLoop(NodeId),
	/// The edge is already present.
	#[error("edge {a} ↔ {b} already exists")]
	DuplicateEdge { a: NodeId, b: NodeId },
}

fn check_range(node: NodeId, node_count: usize) -> Result<NodeId, GraphError> {
	if node < node_count {
		Ok(node)
	} else {
		Err(GraphError::NodeOutOfRange {
			node,
			max: node_count.saturating_sub(1),
		})
	}
}

/// Parse a node identifier typed by the user and check it against `node_count`.
pub fn parse_node(text: &str, node_count: usize) -> Result<NodeId, GraphError> {
	let text = text.trim();
	if text.is_empty() {
		return Err(GraphError::MissingNode);
	}
	let node = text
		.parse::<NodeId>()
		.map_err(|_| GraphError::NotANumber(text.to_string()))?;
	check_range(node, node_count)
}

/// The editable edge list behind the graph builder.
///
/// Every edge held here has already passed validation, so a [`Graph`] built
/// from it can never contain self-loops or duplicate edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
	node_count: usize,
	edges: Vec<Edge>,
}

impl EdgeList {
	pub fn new(node_count: usize) -> Self {
		Self {
			node_count,
			edges: Vec::new(),
		}
	}

	pub fn node_count(&self) -> usize {
		self.node_count
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Add an undirected edge after validating both endpoints.
	pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
		check_range(a, self.node_count)?;
		check_range(b, self.node_count)?;
		if a == b {
			return Err(GraphError::SelfLoop(a));
		}
		let edge = Edge::new(a, b);
		if self.edges.iter().any(|e| e.same_pair(&edge)) {
			return Err(GraphError::DuplicateEdge { a, b });
		}
		self.edges.push(edge);
		Ok(())
	}

	/// Remove the edge at `index`, if any.
	pub fn remove(&mut self, index: usize) -> Option<Edge> {
		(index < self.edges.len()).then(|| self.edges.remove(index))
	}

	/// Change the node count, dropping edges that no longer fit.
	pub fn set_node_count(&mut self, node_count: usize) {
		self.node_count = node_count;
		self.edges.retain(|e| e.a < node_count && e.b < node_count);
	}

	pub fn clear(&mut self) {
		self.edges.clear();
	}

	/// Build the adjacency structure for a traversal.
	pub fn to_graph(&self) -> Graph {
		let mut adjacency = vec![Vec::new(); self.node_count];
		for edge in &self.edges {
			adjacency[edge.a].push(edge.b);
			adjacency[edge.b].push(edge.a);
		}
		Graph { adjacency }
	}
}

/// Immutable adjacency structure handed to the step generator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
	/// Build a graph with nodes `0..node_count` from a list of edges, rejecting
	/// anything that would not be a simple undirected graph.
	pub fn from_edges(node_count: usize, edges: &[Edge]) -> Result<Self, GraphError> {
		let mut list = EdgeList::new(node_count);
		for edge in edges {
			list.add(edge.a, edge.b)?;
		}
		Ok(list.to_graph())
	}

	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	pub fn contains(&self, node: NodeId) -> bool {
		node < self.adjacency.len()
	}

	/// Neighbors of `node` in insertion order. Unknown nodes have none.
	pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
		self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Every undirected edge once, lower endpoint first.
	pub fn edges(&self) -> Vec<Edge> {
		let mut out = Vec::new();
		for (a, neighbors) in self.adjacency.iter().enumerate() {
			for &b in neighbors {
				if a < b {
					out.push(Edge::new(a, b));
				}
			}
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_self_loops_and_duplicates() {
		let mut list = EdgeList::new(4);
		list.add(0, 1).unwrap();
		assert_eq!(list.add(2, 2), Err(GraphError::SelfLoop(2)));
		assert_eq!(list.add(1, 0), Err(GraphError::DuplicateEdge { a: 1, b: 0 }));
		assert_eq!(
			list.add(0, 4),
			Err(GraphError::NodeOutOfRange { node: 4, max: 3 })
		);
		assert_eq!(list.len(), 1);
	}

	#[test]
	fn graph_is_symmetric() {
		let graph = Graph::from_edges(4, &[Edge::new(0, 3), Edge::new(3, 1)]).unwrap();
		assert_eq!(graph.neighbors(3), &[0, 1]);
		assert_eq!(graph.neighbors(0), &[3]);
		assert_eq!(graph.neighbors(2), &[] as &[NodeId]);
		assert_eq!(graph.neighbors(9), &[] as &[NodeId]);
		assert_eq!(graph.edges(), vec![Edge::new(0, 3), Edge::new(1, 3)]);
	}

	#[test]
	fn from_edges_propagates_validation() {
		let err = Graph::from_edges(3, &[Edge::new(0, 1), Edge::new(1, 0)]).unwrap_err();
		assert!(matches!(err, GraphError::DuplicateEdge { .. }));
	}

	#[test]
	fn shrinking_drops_dangling_edges() {
		let mut list = EdgeList::new(5);
		list.add(0, 1).unwrap();
		list.add(3, 4).unwrap();
		list.add(1, 2).unwrap();
		list.set_node_count(3);
		assert_eq!(list.edges(), &[Edge::new(0, 1), Edge::new(1, 2)]);
		assert_eq!(list.remove(0), Some(Edge::new(0, 1)));
		assert_eq!(list.remove(5), None);
	}

	#[test]
	fn parses_node_text() {
		assert_eq!(parse_node(" 2 ", 3), Ok(2));
		assert_eq!(parse_node("", 3), Err(GraphError::MissingNode));
		assert_eq!(
			parse_node("x", 3),
			Err(GraphError::NotANumber("x".to_string()))
		);
		assert_eq!(
			parse_node("3", 3),
			Err(GraphError::NodeOutOfRange { node: 3, max: 2 })
		);
		assert_eq!(
			parse_node("-1", 3),
			Err(GraphError::NotANumber("-1".to_string()))
		);
	}
}
