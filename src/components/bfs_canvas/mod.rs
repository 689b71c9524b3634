//! Canvas view of the graph under traversal.
//!
//! Renders the graph on an HTML canvas with:
//! - Force-directed placement of nodes via `force_graph`
//! - Node colors driven by the playback [`VisualState`](crate::bfs::VisualState)
//! - Highlighted edges along the shortest path once it is found
//! - Node dragging
//!
//! # Example
//!
//! ```ignore
//! use bfs_stepper::components::bfs_canvas::BfsCanvas;
//!
//! view! { <BfsCanvas graph=graph visual=visual height=400.0 /> }
//! ```

mod component;
pub mod layout;
mod render;
pub mod theme;

pub use component::BfsCanvas;
pub use layout::GraphLayout;
pub use theme::Theme;
