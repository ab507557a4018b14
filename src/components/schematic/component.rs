use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::selection::SelectionController;
use super::state::CanvasState;
use super::store::{GraphStore, NodePatch};
use super::types::Position;

/// The schematic surface: draws the store's nodes and edges and turns
/// pointer gestures into selection, drag, pan, zoom, and connection
/// events against the shared signals.
#[component]
pub fn SchematicCanvas(
	store: RwSignal<GraphStore>,
	selection: RwSignal<SelectionController>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0),
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(CanvasState::new(w, h));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = (
				canvas_resize
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0),
				canvas_resize
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				store.with_untracked(|graph| {
					selection.with_untracked(|sel| render::render(s, graph, sel, &ctx));
				});
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			// Port beats card beats edge beats background.
			let (port, node, edge) = store.with_untracked(|graph| {
				(
					s.source_port_at(graph, x, y),
					s.node_at(graph, x, y),
					s.edge_at(graph, x, y),
				)
			});
			if let Some(id) = port {
				let (gx, gy) = s.screen_to_graph(x, y);
				s.link.active = true;
				s.link.source_id = Some(id);
				s.link.cursor_x = gx;
				s.link.cursor_y = gy;
			} else if let Some(id) = node {
				selection.update(|sel| sel.select_node(&id));
				s.drag.active = true;
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.drag.node_start = store
					.with_untracked(|graph| graph.node(&id).map(|n| n.position))
					.unwrap_or_default();
				s.drag.node_id = Some(id);
			} else if let Some(id) = edge {
				selection.update(|sel| sel.select_edge(id));
			} else {
				selection.update(|sel| sel.clear());
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.link.active {
				let (gx, gy) = s.screen_to_graph(x, y);
				s.link.cursor_x = gx;
				s.link.cursor_y = gy;
			} else if s.drag.active {
				if let Some(id) = s.drag.node_id.clone() {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let position =
						Position::new(s.drag.node_start.x + dx, s.drag.node_start.y + dy);
					store.update(|graph| {
						if let Err(err) = graph.update_node(&id, NodePatch::moved_to(position)) {
							warn!("drag ignored: {err}");
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.link.active {
				let target = store.with_untracked(|graph| s.node_at(graph, x, y));
				if let (Some(source), Some(target)) = (s.link.source_id.take(), target) {
					store.update(|graph| match graph.connect(&source, &target) {
						Ok(id) => debug!("connected {source} -> {target} as {id}"),
						Err(err) => warn!("connection rejected: {err}"),
					});
				}
			}
			s.link.active = false;
			s.link.source_id = None;
			s.drag.active = false;
			s.drag.node_id = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.link.active = false;
			s.link.source_id = None;
			s.drag.active = false;
			s.drag.node_id = None;
			s.pan.active = false;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="schematic-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: default;"
		/>
	}
}
