use std::collections::{BTreeSet, VecDeque};

use bfs_stepper::bfs::{EdgeList, Graph, MIN_NODES, NodeId, Step, StepKind, generate_steps};
use proptest::prelude::*;

/// Random simple graph; pairs rejected by the edge list are skipped.
fn graph_strategy() -> impl Strategy<Value = Graph> {
	(MIN_NODES..=10usize)
		.prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 2)))
		.prop_map(|(n, pairs)| {
			let mut list = EdgeList::new(n);
			for (a, b) in pairs {
				let _ = list.add(a, b);
			}
			list.to_graph()
		})
}

/// Plain BFS distances used as the reference.
fn distances(graph: &Graph, start: NodeId) -> Vec<Option<usize>> {
	let mut dist = vec![None; graph.node_count()];
	dist[start] = Some(0);
	let mut queue = VecDeque::from([start]);
	while let Some(v) = queue.pop_front() {
		let d = dist[v].unwrap();
		for &w in graph.neighbors(v) {
			if dist[w].is_none() {
				dist[w] = Some(d + 1);
				queue.push_back(w);
			}
		}
	}
	dist
}

proptest! {
	#[test]
	fn trace_is_well_formed(
		graph in graph_strategy(),
		start_seed in any::<usize>(),
		goal_seed in prop::option::of(any::<usize>()),
	) {
		let n = graph.node_count();
		let start = start_seed % n;
		let goal = goal_seed.map(|g| g % n);
		let steps = generate_steps(&graph, start, goal);

		prop_assert_eq!(steps.first().map(Step::kind), Some(StepKind::Start));
		prop_assert_eq!(steps[0].node(), Some(start));
		prop_assert!(steps.last().is_some_and(Step::is_terminal));
		prop_assert_eq!(steps.iter().filter(|s| s.is_terminal()).count(), 1);
		prop_assert!(steps.iter().all(|s| s.kind() != StepKind::AlreadyVisited));
		prop_assert_eq!(generate_steps(&graph, start, goal), steps);
	}

	#[test]
	fn visits_follow_distance_order(
		graph in graph_strategy(),
		start_seed in any::<usize>(),
	) {
		let start = start_seed % graph.node_count();
		let dist = distances(&graph, start);
		let steps = generate_steps(&graph, start, None);

		let visits: Vec<NodeId> = steps
			.iter()
			.filter(|s| s.kind() == StepKind::Visit)
			.filter_map(Step::node)
			.collect();
		let unique: BTreeSet<NodeId> = visits.iter().copied().collect();
		prop_assert_eq!(unique.len(), visits.len());
		prop_assert!(visits.windows(2).all(|w| dist[w[0]] <= dist[w[1]]));

		let reachable: BTreeSet<NodeId> = (0..graph.node_count())
			.filter(|&v| dist[v].is_some())
			.collect();
		prop_assert_eq!(unique, reachable);
		match steps.last() {
			Some(Step::Done { visited }) => prop_assert_eq!(visited, &visits),
			other => prop_assert!(false, "expected Done, got {:?}", other),
		}
	}

	#[test]
	fn path_is_shortest(
		graph in graph_strategy(),
		start_seed in any::<usize>(),
		goal_seed in any::<usize>(),
	) {
		let n = graph.node_count();
		let (start, goal) = (start_seed % n, goal_seed % n);
		let dist = distances(&graph, start);
		let steps = generate_steps(&graph, start, Some(goal));

		match (dist[goal], steps.last()) {
			(Some(d), Some(Step::Path { path, .. })) => {
				prop_assert_eq!(path.len(), d + 1);
				prop_assert_eq!(path.first(), Some(&start));
				prop_assert_eq!(path.last(), Some(&goal));
				prop_assert!(path.windows(2).all(|w| graph.neighbors(w[0]).contains(&w[1])));
				prop_assert_eq!(steps[steps.len() - 2].kind(), StepKind::Goal);
			}
			(None, Some(Step::Done { .. })) => {
				prop_assert!(steps.iter().all(|s| s.kind() != StepKind::Goal));
			}
			(d, last) => prop_assert!(false, "distance {:?} but trace ended with {:?}", d, last),
		}
	}
}
