//! File and view tool buttons. None of these are wired up yet: there
//! is no persistence layer, and the canvas owns its own zoom.

use leptos::prelude::*;

/// Inert toolbar shown on the sidebar's Tools tab.
#[component]
pub fn Toolbar() -> impl IntoView {
	view! {
		<div class="toolbar">
			<div class="toolbar-group">
				<h3>"File"</h3>
				<div class="toolbar-grid">
					<button class="tool-button" title="Save Project">"Save"</button>
					<button class="tool-button" title="Import">"Import"</button>
					<button class="tool-button" title="Export">"Export"</button>
				</div>
			</div>
			<div class="toolbar-group">
				<h3>"View"</h3>
				<div class="toolbar-grid">
					<button class="tool-button" title="Zoom In">"Zoom In"</button>
					<button class="tool-button" title="Zoom Out">"Zoom Out"</button>
				</div>
			</div>
		</div>
	}
}
