//! Narrated step log, status chip and traversal summary.

use leptos::prelude::*;

use crate::app::AppState;
use crate::bfs::narrate::join_nodes;
use crate::bfs::{NodeVisual, SearchStatus, VisualState};

fn status_class(status: SearchStatus) -> &'static str {
	match status {
		SearchStatus::Idle => "status idle",
		SearchStatus::Running => "status running",
		SearchStatus::Paused => "status paused",
		SearchStatus::Done => "status done",
		SearchStatus::NoPath => "status no-path",
	}
}

/// Class list for one visited-chip.
fn chip_class(visual: &VisualState, visited: &[usize], node: usize) -> String {
	let mut class = format!("vchip {}", visual.get(node).as_str());
	if visited.contains(&node) && visual.get(node) != NodeVisual::Current {
		class.push_str(" lit");
	}
	class
}

#[component]
pub fn LogPanel(app: AppState) -> impl IntoView {
	let playback = app.playback;

	let counter = move || {
		playback
			.counter
			.get()
			.map_or_else(|| "—".to_string(), |(i, n)| format!("{i} / {n}"))
	};

	let lines = move || {
		playback
			.log
			.get()
			.into_iter()
			.enumerate()
			.map(|(i, entry)| {
				view! {
					<div class={format!("log-line {}", entry.kind.class())}>
						<span class="step-num">{format!("{:02}", i + 1)}</span>
						<span class="text">{entry.text}</span>
					</div>
				}
			})
			.collect_view()
	};

	let chips = move || {
		let visited = playback.visited.get();
		playback.visual.with(|visual| match visual {
			None => view! { <span class="empty">"—"</span> }.into_any(),
			Some(visual) => visual
				.nodes()
				.iter()
				.enumerate()
				.map(|(node, _)| {
					view! { <span class={chip_class(visual, &visited, node)}>{node}</span> }
				})
				.collect_view()
				.into_any(),
		})
	};

	view! {
		<section class="panel log">
			<header>
				<span class=move || status_class(playback.status.get())>
					<span class="dot"></span>
					{move || playback.status.get().label()}
				</span>
				<span class="step-counter">{counter}</span>
				<button class="btn btn-small" on:click=move |_| playback.clear_log()>
					"Clear"
				</button>
			</header>
			<div class="log-body">{lines}</div>
			<div class="visited">
				<span class="label">"Visited"</span>
				{chips}
			</div>
			<div class=move || {
				if playback.path.with(Option::is_some) { "path-result visible" } else { "path-result" }
			}>
				<span>"Shortest path: "</span>
				<span class="path-value">
					{move || playback.path.with(|p| p.as_deref().map(|p| join_nodes(p, " → ")).unwrap_or_default())}
				</span>
			</div>
		</section>
	}
}
