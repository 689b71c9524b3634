//! Leptos component wrapping the traversal canvas.
//!
//! The component creates an HTML canvas element, lays the graph out with a
//! force simulation and redraws it on every `requestAnimationFrame` using the
//! latest visual state. Nodes can be dragged to tidy up the layout.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::layout::{FRAME_DT, GraphLayout};
use super::render;
use super::theme::Theme;
use crate::bfs::{Graph, VisualState};

/// Width used when the canvas has no sized parent.
const FALLBACK_WIDTH: f64 = 700.0;

/// Bundles the layout with its visual configuration.
struct CanvasContext {
	layout: GraphLayout,
	theme: Theme,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH)
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the graph and the traversal state on a canvas element.
///
/// `graph` changes rebuild the layout; `visual` changes only recolor nodes
/// and edges. A `None` visual state draws every node in its default style.
#[component]
pub fn BfsCanvas(
	#[prop(into)] graph: Signal<Graph>,
	#[prop(into)] visual: Signal<Option<VisualState>>,
	#[prop(default = 400.0)] height: f64,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared<CanvasContext> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let graph = graph.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(ref mut c) = *context_init.borrow_mut() {
			debug!("bfs-stepper: relayout for {} nodes", graph.node_count());
			c.layout = GraphLayout::new(&graph, c.layout.width, c.layout.height);
			return;
		}

		let Some(window) = web_sys::window() else {
			return;
		};
		let width = parent_width(&canvas);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("bfs-stepper: canvas has no 2d context");
			return;
		};

		*context_init.borrow_mut() = Some(CanvasContext {
			layout: GraphLayout::new(&graph, width, height),
			theme: theme.clone(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let width = parent_width(&canvas_resize);
			canvas_resize.set_width(width as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.layout.resize(width, height);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.layout.tick(FRAME_DT);
				visual.with_untracked(|v| render::render(&c.layout, v.as_ref(), &ctx, &c.theme));
			}
			if let (Some(cb), Some(window)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut c) = *context_md.borrow_mut() {
			let radius = c.theme.node_radius;
			if c.layout.begin_drag(x, y, radius) {
				debug!("bfs-stepper: dragging node at ({x:.0}, {y:.0})");
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.layout.drag_to(x, y);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.layout.end_drag();
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.layout.end_drag();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="bfs-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; cursor: grab;"
		/>
	}
}
