//! bfs-stepper: Step-by-step breadth-first search visualizer.
//!
//! This crate provides a WASM app that lets a user build a small undirected
//! graph, then animates a BFS over it one step at a time with pause, resume
//! and reset, narrating every step and highlighting the shortest path.
//!
//! The [`bfs`] module holds the DOM-free core and is usable natively.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod app;
pub mod bfs;
pub mod components;
pub mod config;
pub mod timer;

pub use app::AppState;
pub use components::bfs_canvas::{BfsCanvas, Theme};
use components::{ControlsPanel, LogPanel};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("bfs-stepper: logging initialized");
}

/// Main application component.
/// Reads the embedded config and lays out the builder, canvas and log.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = config::load_config();
	let theme = Theme::by_name(&config.theme);
	let theme_name = theme.name;
	let app = AppState::new(&config);

	let edges = app.edges;
	let graph = Memo::new(move |_| edges.with(|e| e.to_graph()));
	let visual = app.playback.visual;

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme_name />
		<Title text="BFS Step-by-Step Visualizer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="bfs-app">
			<header class="app-header">
				<h1>"Breadth-First Search"</h1>
				<p class="subtitle">"Build a graph, pick a start and goal, then watch BFS explore it."</p>
			</header>
			<div class="layout">
				<ControlsPanel app=app />
				<div class="canvas-wrap">
					<BfsCanvas graph=graph visual=visual height=420.0 theme=theme />
					<div class="legend">
						<span class="legend-item start">"Start"</span>
						<span class="legend-item end">"Goal"</span>
						<span class="legend-item current">"Current"</span>
						<span class="legend-item visited">"Visited"</span>
						<span class="legend-item path">"Path"</span>
					</div>
				</div>
				<LogPanel app=app />
			</div>
		</main>
	}
}
