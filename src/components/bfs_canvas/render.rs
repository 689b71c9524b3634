//! Canvas rendering for the traversal view.
//!
//! Drawing happens in three passes for correct z-ordering:
//! 1. Background gradient and dot grid
//! 2. Edges, with path edges drawn last so their glow sits on top
//! 3. Nodes and their labels

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::GraphLayout;
use super::theme::Theme;
use crate::bfs::{NodeVisual, VisualState};

/// Renders the complete graph to the canvas.
///
/// Without a `visual` state (no run yet, or after a reset) every node is
/// drawn in its default style.
pub fn render(
	layout: &GraphLayout,
	visual: Option<&VisualState>,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	draw_background(layout, ctx, theme);

	let positions = layout.positions();
	draw_edges(layout, &positions, visual, ctx, theme);
	draw_nodes(&positions, visual, ctx, theme);
}

fn draw_background(layout: &GraphLayout, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bg = &theme.background;
	let gradient = bg
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				layout.width / 2.0,
				layout.height / 2.0,
				0.0,
				layout.width / 2.0,
				layout.height / 2.0,
				layout.width.max(layout.height) * 0.8,
			)
			.ok()
		})
		.flatten()
		.filter(|g| {
			g.add_color_stop(0.0, &bg.color_secondary.to_css()).is_ok()
				&& g.add_color_stop(1.0, &bg.color.to_css()).is_ok()
		});

	if let Some(gradient) = gradient {
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&bg.color.to_css());
	}
	ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

	if bg.grid_color.a <= 0.0 || bg.grid_spacing <= 0.0 {
		return;
	}
	ctx.set_fill_style_str(&bg.grid_color.to_css());
	let mut x = bg.grid_spacing;
	while x < layout.width {
		let mut y = bg.grid_spacing;
		while y < layout.height {
			ctx.begin_path();
			let _ = ctx.arc(x, y, 1.0, 0.0, PI * 2.0);
			ctx.fill();
			y += bg.grid_spacing;
		}
		x += bg.grid_spacing;
	}
}

fn draw_edges(
	layout: &GraphLayout,
	positions: &[(f64, f64)],
	visual: Option<&VisualState>,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let on_path = |a, b| visual.is_some_and(|v| v.is_path_edge(a, b));

	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(theme.edge.width);
	ctx.set_shadow_blur(0.0);
	for &(a, b) in layout.edges() {
		if !on_path(a, b) {
			draw_line(ctx, positions, a, b);
		}
	}

	let path_css = theme.edge.path_color.to_css();
	ctx.set_stroke_style_str(&path_css);
	ctx.set_line_width(theme.edge.path_width);
	ctx.set_shadow_color(&path_css);
	ctx.set_shadow_blur(theme.edge.path_glow);
	for &(a, b) in layout.edges() {
		if on_path(a, b) {
			draw_line(ctx, positions, a, b);
		}
	}
	ctx.set_shadow_blur(0.0);
}

fn draw_line(ctx: &CanvasRenderingContext2d, positions: &[(f64, f64)], a: usize, b: usize) {
	let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(a), positions.get(b)) else {
		return;
	};
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
}

fn draw_nodes(
	positions: &[(f64, f64)],
	visual: Option<&VisualState>,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let radius = theme.node_radius;
	ctx.set_font(&theme.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for (id, &(x, y)) in positions.iter().enumerate() {
		let state = visual.map_or(NodeVisual::Default, |v| v.get(id));
		let style = theme.nodes.get(state);

		ctx.set_shadow_color(&style.stroke.to_css());
		ctx.set_shadow_blur(style.glow);

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.fill.to_css());
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&style.stroke.to_css());
		ctx.set_line_width(style.stroke_width);
		ctx.stroke();
		ctx.set_shadow_blur(0.0);

		ctx.set_fill_style_str(&style.text.to_css());
		let _ = ctx.fill_text(&id.to_string(), x, y);
	}
}
