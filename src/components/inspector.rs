//! Properties panel for the current selection.
//!
//! Node attribute edits go through an [`AttributeDraft`]: keystrokes
//! mutate only the draft, a field blur commits the whole draft, and the
//! color controls additionally commit on every change. Provenance and
//! position are display-only.

use leptos::prelude::*;
use log::warn;

use super::schematic::editor::AttributeDraft;
use super::schematic::types::NodeRecord;
use super::schematic::{GraphStore, Selection, SelectionController};

/// Right-hand inspector: node editor, edge detail, or a hint when
/// nothing is selected. Selected ids are re-validated against the store
/// before any detail renders.
#[component]
pub fn PropertiesPanel(
	store: RwSignal<GraphStore>,
	selection: RwSignal<SelectionController>,
) -> impl IntoView {
	view! {
		<div class="inspector">
			<h3>"Properties"</h3>
			{move || {
				let hint = || {
					view! {
						<p class="muted">"Select a node or edge to view and edit its properties."</p>
					}
				};
				match selection.with(|sel| sel.current().clone()) {
					Selection::None => hint().into_any(),
					Selection::Node(id) => {
						// Seeding reads the store untracked: the draft is
						// authoritative until committed, so a store change
						// must not reset an editing session.
						match store.with_untracked(|graph| graph.node(&id).cloned()) {
							Some(node) => view! { <NodeEditor store=store node=node /> }.into_any(),
							None => hint().into_any(),
						}
					}
					Selection::Edge(id) => {
						match store.with_untracked(|graph| graph.edge(&id).cloned()) {
							Some(edge) => {
								view! {
									<div class="field">
										<label for="edge-id">"Edge ID"</label>
										<input id="edge-id" prop:value=edge.id.clone() disabled />
									</div>
									<div class="field">
										<label for="edge-source">"Source"</label>
										<input id="edge-source" prop:value=edge.source.clone() disabled />
									</div>
									<div class="field">
										<label for="edge-target">"Target"</label>
										<input id="edge-target" prop:value=edge.target.clone() disabled />
									</div>
								}
								.into_any()
							}
							None => hint().into_any(),
						}
					}
				}
			}}
		</div>
	}
}

#[component]
fn NodeEditor(store: RwSignal<GraphStore>, node: NodeRecord) -> impl IntoView {
	let draft = RwSignal::new(AttributeDraft::seed(&node));

	let commit = move || {
		let result = store.try_update(|graph| draft.with_untracked(|d| d.commit(graph)));
		if let Some(Err(err)) = result {
			warn!("attribute commit failed: {err}");
		}
	};
	let commit_color = move || {
		let result = store.try_update(|graph| draft.with_untracked(|d| d.commit_color(graph)));
		if let Some(Err(err)) = result {
			warn!("color commit failed: {err}");
		}
	};

	// Position is not part of the draft; it tracks the store so a drag
	// shows up live while an editing session is open.
	let position_id = node.id.clone();
	let position = Memo::new(move |_| {
		store.with(|graph| graph.node(&position_id).map(|n| n.position).unwrap_or_default())
	});

	view! {
		<div class="field">
			<label for="node-label">"Label"</label>
			<input
				id="node-label"
				prop:value=move || draft.with(|d| d.label.clone())
				on:input=move |ev| draft.update(|d| d.label = event_target_value(&ev))
				on:blur=move |_| commit()
			/>
		</div>
		<div class="field">
			<label for="node-description">"Description"</label>
			<textarea
				id="node-description"
				rows="2"
				prop:value=move || draft.with(|d| d.description.clone())
				on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
				on:blur=move |_| commit()
			></textarea>
		</div>
		<div class="field">
			<label for="node-specs">"Specifications"</label>
			<textarea
				id="node-specs"
				rows="2"
				prop:value=move || draft.with(|d| d.specs.clone())
				on:input=move |ev| draft.update(|d| d.specs = event_target_value(&ev))
				on:blur=move |_| commit()
			></textarea>
		</div>
		<div class="field">
			<label for="node-color">"Color"</label>
			<div class="color-row">
				<input
					type="color"
					prop:value=move || draft.with(|d| d.color.clone())
					on:input=move |ev| {
						draft.update(|d| d.color = event_target_value(&ev));
						commit_color();
					}
				/>
				<input
					id="node-color"
					prop:value=move || draft.with(|d| d.color.clone())
					on:input=move |ev| {
						draft.update(|d| d.color = event_target_value(&ev));
						commit_color();
					}
				/>
			</div>
		</div>
		{node
			.data
			.provenance
			.clone()
			.map(|provenance| {
				view! {
					<div class="field">
						<label>"Barcode"</label>
						<input prop:value=provenance.barcode.clone() disabled />
					</div>
					<div class="field">
						<label>"Manufacturer"</label>
						<input prop:value=provenance.manufacturer.clone() disabled />
					</div>
					<div class="field">
						<label>"Model"</label>
						<input prop:value=provenance.model.clone() disabled />
					</div>
				}
			})}
		<div class="field">
			<label>"Position"</label>
			<div class="field-row">
				<div>
					<label class="hint">"X"</label>
					<input prop:value=move || format!("{}", position.get().x.round()) disabled />
				</div>
				<div>
					<label class="hint">"Y"</label>
					<input prop:value=move || format!("{}", position.get().y.round()) disabled />
				</div>
			</div>
		</div>
	}
}
