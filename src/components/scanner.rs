//! Barcode scanner dialog: camera, manual, and custom entry paths.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use leptos::__reexports::send_wrapper::SendWrapper;
use log::{debug, warn};

use super::schematic::GraphStore;
use super::schematic::catalog::StaticCatalog;
use super::schematic::resolve::{
	CAMERA_SCAN_DELAY, CustomDraft, MANUAL_LOOKUP_DELAY, ResolutionState, ResolutionWorkflow,
	ResolveTicket,
};
use super::schematic::types::CUSTOM_COLOR;

#[derive(Clone, Copy, PartialEq)]
enum ScanTab {
	Camera,
	Manual,
	Custom,
}

/// Modal dialog that resolves a barcode (or custom entry) into a
/// component and commits it into the schematic. The simulated lookup
/// latency runs on a cancellable timeout; closing or cancelling the
/// dialog clears the timer and invalidates the in-flight resolution.
#[component]
pub fn ComponentScanner(store: RwSignal<GraphStore>, on_close: Callback<()>) -> impl IntoView {
	let workflow = RwSignal::new(ResolutionWorkflow::new());
	let tab = RwSignal::new(ScanTab::Camera);
	let manual_code = RwSignal::new(String::new());
	let custom = RwSignal::new(CustomDraft::default());

	let catalog: SendWrapper<Rc<StaticCatalog>> = SendWrapper::new(Rc::new(StaticCatalog::new()));
	let pending: SendWrapper<Rc<RefCell<Option<TimeoutHandle>>>> =
		SendWrapper::new(Rc::new(RefCell::new(None)));

	let schedule = {
		let catalog = catalog.clone();
		let pending = pending.clone();
		move |ticket: ResolveTicket, delay: Duration| {
			let catalog = catalog.clone();
			let scheduled = set_timeout_with_handle(
				move || {
					workflow.update(|w| {
						w.settle(ticket, &**catalog);
					});
				},
				delay,
			);
			match scheduled {
				Ok(handle) => *pending.borrow_mut() = Some(handle),
				Err(err) => warn!("could not schedule lookup timer: {err:?}"),
			}
		}
	};

	let camera_scan = {
		let schedule = schedule.clone();
		move || match workflow.try_update(|w| w.begin_camera()) {
			Some(Ok(ticket)) => schedule(ticket, CAMERA_SCAN_DELAY),
			Some(Err(err)) => warn!("camera scan not started: {err}"),
			None => {}
		}
	};

	let manual_scan = {
		let schedule = schedule.clone();
		move || {
			let code = manual_code.get_untracked();
			match workflow.try_update(|w| w.begin_manual(&code)) {
				Some(Ok(ticket)) => schedule(ticket, MANUAL_LOOKUP_DELAY),
				Some(Err(err)) => warn!("lookup not started: {err}"),
				None => {}
			}
		}
	};

	// Hands the settled candidate to the store and closes the dialog.
	let commit = {
		let pending = pending.clone();
		move || {
			if let Some(handle) = pending.borrow_mut().take() {
				handle.clear();
			}
			if let Some(record) = workflow.try_update(|w| w.take_candidate()).flatten() {
				debug!("adding component {} to schematic", record.barcode);
				store.update(|graph| {
					graph.add_node(record.into(), None);
				});
			}
			on_close.run(());
		}
	};

	let custom_add = {
		let commit = commit.clone();
		move || match workflow.try_update(|w| w.submit_custom(&custom.get_untracked())) {
			Some(Ok(_)) => commit(),
			Some(Err(err)) => warn!("custom component rejected: {err}"),
			None => {}
		}
	};

	let cancel = {
		let pending = pending.clone();
		move || {
			if let Some(handle) = pending.borrow_mut().take() {
				handle.clear();
			}
			workflow.update(|w| w.cancel());
			on_close.run(());
		}
	};

	let resolving = move || workflow.with(|w| w.is_resolving());
	let (cancel_overlay, cancel_x, cancel_button) = (cancel.clone(), cancel.clone(), cancel);
	let (manual_button, manual_enter) = (manual_scan.clone(), manual_scan);
	let commit_scanned = commit;

	view! {
		<div class="dialog-overlay" on:click=move |_| cancel_overlay()>
			<div class="dialog" on:click=move |ev| ev.stop_propagation()>
				<div class="dialog-header">
					<div>
						<h2>"Scan Component Barcode"</h2>
						<p class="muted">"Scan a barcode to automatically load component specifications"</p>
					</div>
					<button class="icon-button" on:click=move |_| cancel_x()>"✕"</button>
				</div>

				<div class="tab-list">
					<button
						class="tab-trigger"
						class:active=move || tab.get() == ScanTab::Camera
						on:click=move |_| tab.set(ScanTab::Camera)
					>
						"Camera"
					</button>
					<button
						class="tab-trigger"
						class:active=move || tab.get() == ScanTab::Manual
						on:click=move |_| tab.set(ScanTab::Manual)
					>
						"Manual"
					</button>
					<button
						class="tab-trigger"
						class:active=move || tab.get() == ScanTab::Custom
						on:click=move |_| tab.set(ScanTab::Custom)
					>
						"Custom"
					</button>
				</div>

				{move || match tab.get() {
					ScanTab::Camera => {
						let camera_scan = camera_scan.clone();
						view! {
							<div class="tab-panel">
								<div class="camera-preview">
									<p class="muted">"Camera preview would appear here"</p>
									<p class="hint">"In a real implementation, this would show live camera feed"</p>
								</div>
								<button
									class="button primary full"
									disabled=resolving
									on:click=move |_| camera_scan()
								>
									{move || if resolving() { "Scanning..." } else { "Start Camera Scan" }}
								</button>
							</div>
						}
						.into_any()
					}
					ScanTab::Manual => {
						let manual_button = manual_button.clone();
						let manual_enter = manual_enter.clone();
						view! {
							<div class="tab-panel">
								<label for="barcode">"Barcode Number"</label>
								<input
									id="barcode"
									placeholder="Enter barcode (try: 123456789012)"
									prop:value=move || manual_code.get()
									on:input=move |ev| manual_code.set(event_target_value(&ev))
									on:keydown=move |ev| {
										if ev.key() == "Enter" {
											manual_enter();
										}
									}
								/>
								<button
									class="button primary full"
									disabled=move || {
										resolving() || manual_code.with(|c| c.trim().is_empty())
									}
									on:click=move |_| manual_button()
								>
									{move || if resolving() { "Looking up..." } else { "Lookup Component" }}
								</button>
								<div class="hint">
									<p><strong>"Try these sample barcodes:"</strong></p>
									<p>"• 123456789012 (Intel i7-13700K)"</p>
									<p>"• 987654321098 (NVIDIA RTX 4080)"</p>
									<p>"• 456789123456 (Corsair 32GB RAM)"</p>
									<p>"• 789123456789 (Samsung 980 PRO SSD)"</p>
								</div>
							</div>
						}
						.into_any()
					}
					ScanTab::Custom => {
						let custom_add = custom_add.clone();
						view! {
							<div class="tab-panel">
								<div class="field-row">
									<div>
										<label for="custom-name">"Component Name"</label>
										<input
											id="custom-name"
											placeholder="e.g., Intel Core i5"
											prop:value=move || custom.with(|d| d.name.clone())
											on:input=move |ev| {
												custom.update(|d| d.name = event_target_value(&ev))
											}
										/>
									</div>
									<div>
										<label for="custom-manufacturer">"Manufacturer"</label>
										<input
											id="custom-manufacturer"
											placeholder="e.g., Intel"
											prop:value=move || custom.with(|d| d.manufacturer.clone())
											on:input=move |ev| {
												custom.update(|d| d.manufacturer = event_target_value(&ev))
											}
										/>
									</div>
								</div>
								<label for="custom-model">"Model"</label>
								<input
									id="custom-model"
									placeholder="e.g., i5-13600K"
									prop:value=move || custom.with(|d| d.model.clone())
									on:input=move |ev| custom.update(|d| d.model = event_target_value(&ev))
								/>
								<label for="custom-description">"Description"</label>
								<input
									id="custom-description"
									placeholder="Brief description"
									prop:value=move || custom.with(|d| d.description.clone())
									on:input=move |ev| {
										custom.update(|d| d.description = event_target_value(&ev))
									}
								/>
								<label for="custom-specs">"Specifications"</label>
								<textarea
									id="custom-specs"
									placeholder="Enter detailed specifications..."
									rows="3"
									prop:value=move || custom.with(|d| d.specs.clone())
									on:input=move |ev| custom.update(|d| d.specs = event_target_value(&ev))
								></textarea>
								<label for="custom-color">"Color"</label>
								<input
									id="custom-color"
									type="color"
									prop:value=move || {
										custom.with(|d| {
											if d.color.is_empty() { CUSTOM_COLOR.into() } else { d.color.clone() }
										})
									}
									on:input=move |ev| custom.update(|d| d.color = event_target_value(&ev))
								/>
								<button class="button primary full" on:click=move |_| custom_add()>
									"Add Custom Component"
								</button>
							</div>
						}
						.into_any()
					}
				}}

				{move || {
					let fallback = workflow.with(|w| matches!(w.state(), ResolutionState::Fallback(_)));
					workflow
						.with(|w| w.candidate().cloned())
						.map(|record| {
							let commit_scanned = commit_scanned.clone();
							view! {
								<div class="result-card">
									<h3 class:fallback=fallback>
										{if fallback { "Component Not Found" } else { "Component Found!" }}
									</h3>
									<div class="result-grid">
										<div><strong>"Name: "</strong>{record.name.clone()}</div>
										<div><strong>"Manufacturer: "</strong>{record.manufacturer.clone()}</div>
										<div><strong>"Model: "</strong>{record.model.clone()}</div>
										<div><strong>"Category: "</strong>{record.category.clone()}</div>
									</div>
									<div><strong>"Description: "</strong>{record.description.clone()}</div>
									<div><strong>"Specifications: "</strong>{record.specs.clone()}</div>
									<div class="swatch-row">
										<span class="swatch" style:background-color=record.color.clone()></span>
										<span>"Component Color"</span>
									</div>
									<button class="button primary full" on:click=move |_| commit_scanned()>
										"Add to Schematic"
									</button>
								</div>
							}
						})
				}}

				<div class="dialog-footer">
					<button class="button" on:click=move |_| cancel_button()>"Cancel"</button>
				</div>
			</div>
		</div>
	}
}
