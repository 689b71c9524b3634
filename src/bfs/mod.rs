//! Breadth-first search core: step generation and animated playback.
//!
//! Nothing in here touches the DOM. The generator is a pure function of its
//! inputs, and the controller only talks to the outside world through the
//! [`Scheduler`] port and [`PlaybackObserver`] callbacks.
//!
//! # Example
//!
//! ```
//! use bfs_stepper::bfs::{Controller, Edge, Graph, ManualScheduler, Outcome};
//!
//! let graph = Graph::from_edges(3, &[Edge::new(0, 1), Edge::new(1, 2)]).unwrap();
//! let mut controller = Controller::new(ManualScheduler::new(), 0);
//! controller.start(&graph, 0, Some(2), 0).unwrap();
//! while let Some(tick) = controller.scheduler_mut().pop() {
//!     controller.on_tick(tick);
//! }
//! let outcome = controller.session().and_then(|s| s.outcome());
//! assert_eq!(outcome, Some(&Outcome::PathFound(vec![0, 1, 2])));
//! ```

pub mod controller;
pub mod graph;
pub mod narrate;
pub mod preset;
pub mod schedule;
pub mod step;
pub mod visual;

pub use controller::{
	Controller, DEFAULT_DELAY_MS, Outcome, PlaybackError, PlaybackObserver, PlaybackState,
	SearchStatus, Session, StepApplied,
};
pub use graph::{Edge, EdgeList, Graph, GraphError, MAX_NODES, MIN_NODES, NodeId, parse_node};
pub use narrate::{LogEntry, LogKind, announce, narrate};
pub use preset::{Preset, preset};
pub use schedule::{ManualScheduler, Scheduler, Tick};
pub use step::{ParentMap, Step, StepKind, generate_steps};
pub use visual::{NodeVisual, VisualState};
