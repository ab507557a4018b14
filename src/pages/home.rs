use leptos::prelude::*;

use crate::components::inspector::PropertiesPanel;
use crate::components::palette::ComponentPalette;
use crate::components::scanner::ComponentScanner;
use crate::components::schematic::{GraphStore, NodeData, SchematicCanvas, SelectionController};
use crate::components::toolbar::Toolbar;

#[derive(Clone, Copy, PartialEq)]
enum SidebarTab {
	Components,
	Tools,
}

/// The schematic editor: palette sidebar, canvas, properties panel,
/// and the scanner dialog. This page owns the graph store and the
/// selection; everything below it works against these two signals.
#[component]
pub fn Home() -> impl IntoView {
	let store = RwSignal::new(GraphStore::with_demo_graph());
	let selection = RwSignal::new(SelectionController::new());
	let scanner_open = RwSignal::new(false);
	let sidebar_tab = RwSignal::new(SidebarTab::Components);

	let on_add = Callback::new(move |kind: String| {
		store.update(|graph| {
			graph.add_node(NodeData::palette(&kind), None);
		});
	});
	let on_scanner_close = Callback::new(move |_| scanner_open.set(false));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="app-shell">
				<header class="app-header">
					<h1>"TechMap CAD"</h1>
					<div class="header-right">
						<span class="muted">"Project: Untitled"</span>
						<button class="button primary" on:click=move |_| scanner_open.set(true)>
							"Scan Component"
						</button>
					</div>
				</header>

				<div class="editor">
					<aside class="sidebar">
						<div class="tab-list">
							<button
								class="tab-trigger"
								class:active=move || sidebar_tab.get() == SidebarTab::Components
								on:click=move |_| sidebar_tab.set(SidebarTab::Components)
							>
								"Components"
							</button>
							<button
								class="tab-trigger"
								class:active=move || sidebar_tab.get() == SidebarTab::Tools
								on:click=move |_| sidebar_tab.set(SidebarTab::Tools)
							>
								"Tools"
							</button>
						</div>
						{move || match sidebar_tab.get() {
							SidebarTab::Components => {
								view! { <ComponentPalette on_add=on_add /> }.into_any()
							}
							SidebarTab::Tools => view! { <Toolbar /> }.into_any(),
						}}
					</aside>

					<main class="canvas-pane">
						<SchematicCanvas store=store selection=selection />
					</main>

					<aside class="inspector-pane">
						<PropertiesPanel store=store selection=selection />
					</aside>
				</div>

				<Show when=move || scanner_open.get()>
					<ComponentScanner store=store on_close=on_scanner_close />
				</Show>
			</div>
		</ErrorBoundary>
	}
}
