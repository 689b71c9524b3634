//! Graph builder and playback buttons.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::app::AppState;
use crate::bfs::{MAX_NODES, MIN_NODES, PlaybackState};
use crate::config::{MAX_DELAY_MS, MIN_DELAY_MS};

/// Seconds label for the speed slider, e.g. `0.7s`.
fn delay_label(delay_ms: u32) -> String {
	format!("{:.1}s", f64::from(delay_ms) / 1000.0)
}

#[component]
pub fn ControlsPanel(app: AppState) -> impl IntoView {
	let edge_from = RwSignal::new(String::new());
	let edge_to = RwSignal::new(String::new());
	let busy = move || app.busy();

	let add_edge = move || {
		if app.add_edge(&edge_from.get_untracked(), &edge_to.get_untracked()) {
			edge_from.set(String::new());
			edge_to.set(String::new());
		}
	};
	let on_enter = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			add_edge();
		}
	};

	let edge_tags = move || {
		let edges = app.edges.get();
		if edges.is_empty() {
			return view! { <span class="empty">"No edges yet…"</span> }.into_any();
		}
		edges
			.edges()
			.iter()
			.enumerate()
			.map(|(i, edge)| {
				view! {
					<span class="edge-tag">
						{format!("{} ↔ {}", edge.a, edge.b)}
						<button
							class="remove"
							title="Remove edge"
							prop:disabled=busy
							on:click=move |_| app.remove_edge(i)
						>
							"✕"
						</button>
					</span>
				}
			})
			.collect_view()
			.into_any()
	};

	let pause_label = move || match app.playback.state.get() {
		PlaybackState::Paused => "▶ Resume",
		_ => "⏸ Pause",
	};

	view! {
		<section class="panel controls">
			<h2>"Graph"</h2>
			<div class="field">
				<label for="num-nodes">"Nodes"</label>
				<input
					id="num-nodes"
					type="number"
					min={MIN_NODES.to_string()}
					max={MAX_NODES.to_string()}
					prop:value=move || app.edges.with(|e| e.node_count().to_string())
					prop:disabled=busy
					on:change=move |ev| app.set_node_count(&event_target_value(&ev))
				/>
			</div>

			<div class="field edge-builder">
				<label>"Edge"</label>
				<input
					type="number"
					placeholder="from"
					prop:value=move || edge_from.get()
					prop:disabled=busy
					on:input=move |ev| edge_from.set(event_target_value(&ev))
					on:keydown=on_enter
				/>
				<input
					type="number"
					placeholder="to"
					prop:value=move || edge_to.get()
					prop:disabled=busy
					on:input=move |ev| edge_to.set(event_target_value(&ev))
					on:keydown=on_enter
				/>
				<button class="btn" prop:disabled=busy on:click=move |_| add_edge()>
					"+ Add"
				</button>
			</div>
			<div class="edge-list">{edge_tags}</div>

			<div class="field">
				<label for="start-node">"Start"</label>
				<input
					id="start-node"
					type="number"
					prop:value=move || app.start_text.get()
					prop:disabled=busy
					on:input=move |ev| app.start_text.set(event_target_value(&ev))
				/>
				<label for="goal-node">"Goal"</label>
				<input
					id="goal-node"
					type="number"
					placeholder="none"
					prop:value=move || app.goal_text.get()
					prop:disabled=busy
					on:input=move |ev| app.goal_text.set(event_target_value(&ev))
				/>
			</div>

			<div class="field">
				<label for="speed">"Speed"</label>
				<input
					id="speed"
					type="range"
					min={MIN_DELAY_MS.to_string()}
					max={MAX_DELAY_MS.to_string()}
					step="100"
					prop:value=move || app.delay_ms.get().to_string()
					on:input=move |ev| app.set_delay(&event_target_value(&ev))
				/>
				<span class="speed-value">{move || delay_label(app.delay_ms.get())}</span>
			</div>

			<div class="buttons">
				<button class="btn btn-primary" prop:disabled=busy on:click=move |_| app.run()>
					"▶ Run BFS"
				</button>
				<button
					class="btn"
					prop:disabled=move || !busy()
					on:click=move |_| app.toggle_pause()
				>
					{pause_label}
				</button>
				<button class="btn" on:click=move |_| app.reset()>
					"↺ Reset"
				</button>
				<button class="btn" prop:disabled=busy on:click=move |_| app.load_preset()>
					"⚄ Example"
				</button>
			</div>

			<div class=move || {
				if app.alert.with(Option::is_some) { "alert show" } else { "alert" }
			}>{move || app.alert.with(|a| a.as_ref().map(|a| a.message.clone()).unwrap_or_default())}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::delay_label;

	#[test]
	fn speed_label() {
		assert_eq!(delay_label(700), "0.7s");
		assert_eq!(delay_label(2000), "2.0s");
	}
}
