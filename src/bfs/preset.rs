//! Random example graphs for the "load example" button.

use super::graph::{EdgeList, MIN_NODES, NodeId};

/// A generated example: edges plus suggested endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
	pub edges: EdgeList,
	pub start: NodeId,
	pub goal: NodeId,
}

fn pick(rng: &mut impl FnMut() -> f64, upper: usize) -> usize {
	// Guard against sources that return exactly 1.0.
	((rng() * upper as f64) as usize).min(upper - 1)
}

/// Build a connected random graph over `node_count` nodes.
///
/// A random spanning tree over a shuffled node order guarantees
/// connectivity; `max(1, n / 2)` extra edges are then attempted for variety.
/// `rng` must yield values in `[0, 1)`.
pub fn preset(node_count: usize, mut rng: impl FnMut() -> f64) -> Preset {
	let n = node_count.max(MIN_NODES);
	let mut edges = EdgeList::new(n);

	let mut order: Vec<NodeId> = (0..n).collect();
	for i in (1..n).rev() {
		let j = pick(&mut rng, i + 1);
		order.swap(i, j);
	}
	for i in 1..n {
		let parent = order[pick(&mut rng, i)];
		// Tree edges join distinct new nodes, so this cannot fail.
		let _ = edges.add(order[i], parent);
	}

	let extras = (n / 2).max(1);
	let target = n - 1 + extras;
	let mut attempts = 0;
	while attempts < extras * 10 && edges.len() < target {
		attempts += 1;
		let (a, b) = (pick(&mut rng, n), pick(&mut rng, n));
		if a != b {
			let _ = edges.add(a, b);
		}
	}

	Preset {
		edges,
		start: 0,
		goal: n - 1,
	}
}
