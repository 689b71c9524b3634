//! Startup configuration.
//!
//! The host page may embed a JSON document in
//! `<script id="bfs-config" type="application/json">` to seed the builder:
//!
//! ```json
//! { "node_count": 6, "edges": [[0, 1], [1, 2]], "start": 0, "goal": 2, "delay_ms": 500, "theme": "minimal" }
//! ```
//!
//! Every field is optional.

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::bfs::{DEFAULT_DELAY_MS, EdgeList, GraphError, MAX_NODES, MIN_NODES, NodeId};

/// Id of the script element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "bfs-config";
/// Slowest selectable step delay.
pub const MAX_DELAY_MS: u32 = 2000;
/// Fastest selectable step delay.
pub const MIN_DELAY_MS: u32 = 100;

/// Problems found while reading the embedded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid config json: {0}")]
	Json(#[from] serde_json::Error),
	#[error("invalid edge in config: {0}")]
	Edge(#[from] GraphError),
}

/// Initial state of the builder and playback speed.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
	pub node_count: usize,
	pub edges: Vec<(NodeId, NodeId)>,
	pub start: NodeId,
	pub goal: Option<NodeId>,
	pub delay_ms: u32,
	/// Canvas theme name, see `Theme::by_name`.
	pub theme: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			node_count: 5,
			edges: Vec::new(),
			start: 0,
			goal: None,
			delay_ms: DEFAULT_DELAY_MS,
			theme: "default".to_string(),
		}
	}
}

impl AppConfig {
	/// Parse a JSON document and clamp it into range.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: AppConfig = serde_json::from_str(text)?;
		Ok(config.sanitize())
	}

	/// Clamp numeric fields into their supported ranges. Out-of-range
	/// endpoints fall back to the defaults.
	pub fn sanitize(mut self) -> Self {
		self.node_count = self.node_count.clamp(MIN_NODES, MAX_NODES);
		self.delay_ms = self.delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
		if self.start >= self.node_count {
			self.start = 0;
		}
		self.goal = self.goal.filter(|&g| g < self.node_count);
		self
	}

	/// Validated edge list for the configured node count.
	pub fn edge_list(&self) -> Result<EdgeList, ConfigError> {
		let mut list = EdgeList::new(self.node_count);
		for &(a, b) in &self.edges {
			list.add(a, b)?;
		}
		Ok(list)
	}
}

/// Read the configuration embedded in the page, falling back to defaults.
pub fn load_config() -> AppConfig {
	let Some(text) = config_text() else {
		return AppConfig::default();
	};
	match AppConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"bfs-stepper: loaded config with {} nodes, {} edges",
				config.node_count,
				config.edges.len()
			);
			config
		}
		Err(e) => {
			warn!("bfs-stepper: {}", e);
			AppConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
