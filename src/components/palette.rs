//! Palette of component kinds that can be dropped onto the schematic.

use leptos::prelude::*;

const HARDWARE: [&str; 4] = ["CPU", "Memory", "Storage", "GPU"];
const NETWORK: [&str; 4] = ["Router", "Switch", "Server", "Firewall"];

/// Component buttons grouped by family. Clicking one raises `on_add`
/// with the kind label; the page inserts the default node for it.
#[component]
pub fn ComponentPalette(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
	let button = move |kind: &'static str| {
		view! {
			<button class="palette-button" on:click=move |_| on_add.run(kind.to_string())>
				{kind}
			</button>
		}
	};

	view! {
		<div class="palette">
			<div class="palette-group">
				<h3>"Hardware"</h3>
				<div class="palette-grid">
					{HARDWARE.iter().map(|kind| button(*kind)).collect_view()}
				</div>
			</div>
			<div class="palette-group">
				<h3>"Network"</h3>
				<div class="palette-grid">
					{NETWORK.iter().map(|kind| button(*kind)).collect_view()}
				</div>
			</div>
		</div>
	}
}
