//! Visual theming for the traversal canvas.
//!
//! Colors are keyed by [`NodeVisual`], so the renderer never needs to know
//! why a node is in a given state.

use crate::bfs::NodeVisual;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill, stroke, label color and glow for one node state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub fill: Color,
	pub stroke: Color,
	pub text: Color,
	/// Shadow blur radius in pixels (0 = no glow).
	pub glow: f64,
	pub stroke_width: f64,
}

/// Styles for every [`NodeVisual`].
#[derive(Clone, Debug)]
pub struct NodeStyles {
	pub default: NodeStyle,
	pub start: NodeStyle,
	pub end: NodeStyle,
	pub current: NodeStyle,
	pub visited: NodeStyle,
	pub path: NodeStyle,
}

impl NodeStyles {
	pub fn get(&self, visual: NodeVisual) -> &NodeStyle {
		match visual {
			NodeVisual::Default => &self.default,
			NodeVisual::Start => &self.start,
			NodeVisual::End => &self.end,
			NodeVisual::Current => &self.current,
			NodeVisual::Visited => &self.visited,
			NodeVisual::Path => &self.path,
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for the radial gradient
	pub color_secondary: Color,
	pub use_gradient: bool,
	/// Dot grid color; fully transparent disables the grid
	pub grid_color: Color,
	/// Dot grid spacing in pixels
	pub grid_spacing: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	pub width: f64,
	/// Color of edges on the found path
	pub path_color: Color,
	pub path_width: f64,
	/// Glow around path edges
	pub path_glow: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub nodes: NodeStyles,
	/// Node radius in pixels.
	pub node_radius: f64,
	pub label_font: String,
}

impl Theme {
	/// Dark theme with accent colors per traversal state (default)
	pub fn default_theme() -> Self {
		let base = NodeStyle {
			fill: Color::rgb(28, 31, 53),
			stroke: Color::rgb(42, 46, 74),
			text: Color::rgb(123, 130, 168),
			glow: 0.0,
			stroke_width: 1.8,
		};
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(13, 15, 26),
				color_secondary: Color::rgb(22, 25, 42),
				use_gradient: true,
				grid_color: Color::rgba(42, 46, 74, 0.3),
				grid_spacing: 30.0,
			},
			edge: EdgeStyle {
				color: Color::rgb(42, 46, 74),
				width: 1.5,
				path_color: Color::rgb(0, 229, 160),
				path_width: 3.0,
				path_glow: 10.0,
			},
			nodes: NodeStyles {
				default: base,
				start: NodeStyle {
					fill: Color::rgba(108, 99, 255, 0.2),
					stroke: Color::rgb(108, 99, 255),
					text: Color::rgb(165, 160, 255),
					..base
				},
				end: NodeStyle {
					fill: Color::rgba(255, 101, 132, 0.2),
					stroke: Color::rgb(255, 101, 132),
					text: Color::rgb(255, 158, 178),
					..base
				},
				current: NodeStyle {
					fill: Color::rgb(255, 209, 102),
					stroke: Color::rgb(255, 209, 102),
					text: Color::rgb(13, 15, 26),
					glow: 24.0,
					stroke_width: 2.5,
				},
				visited: NodeStyle {
					fill: Color::rgba(0, 212, 255, 0.13),
					stroke: Color::rgb(0, 212, 255),
					text: Color::rgb(0, 212, 255),
					glow: 6.0,
					..base
				},
				path: NodeStyle {
					fill: Color::rgba(0, 229, 160, 0.13),
					stroke: Color::rgb(0, 229, 160),
					text: Color::rgb(0, 229, 160),
					glow: 12.0,
					..base
				},
			},
			node_radius: 22.0,
			label_font: "600 16px 'JetBrains Mono', monospace".to_string(),
		}
	}

	/// Flat light variant without gradient or grid
	pub fn minimal() -> Self {
		let mut theme = Self::default_theme();
		theme.name = "minimal";
		theme.background = BackgroundStyle {
			color: Color::rgb(245, 246, 250),
			color_secondary: Color::rgb(245, 246, 250),
			use_gradient: false,
			grid_color: Color::rgba(0, 0, 0, 0.0),
			grid_spacing: 30.0,
		};
		theme.edge.color = Color::rgb(190, 195, 210);
		theme.nodes.default = NodeStyle {
			fill: Color::rgb(255, 255, 255),
			stroke: Color::rgb(170, 176, 196),
			text: Color::rgb(80, 86, 110),
			glow: 0.0,
			stroke_width: 1.8,
		};
		theme
	}

	/// Look up a theme by name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"minimal" => Self::minimal(),
			_ => Self::default_theme(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
