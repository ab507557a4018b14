use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::selection::SelectionController;
use super::state::{CanvasState, NODE_HEIGHT, NODE_WIDTH, PORT_RADIUS, source_anchor, target_anchor};
use super::store::GraphStore;

const GRID_GAP: f64 = 12.0;
const CARD_RADIUS: f64 = 6.0;
const EDGE_COLOR: &str = "#94a3b8";
const SELECTED_COLOR: &str = "#6366f1";

pub fn render(
	state: &CanvasState,
	store: &GraphStore,
	selection: &SelectionController,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str("#f8fafc");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_grid(state, ctx);
	draw_edges(state, store, selection, ctx);
	draw_pending_link(state, store, ctx);
	draw_nodes(state, store, selection, ctx);
	ctx.restore();
}

fn draw_grid(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	// Dot count explodes when zoomed far out; drop the grid instead.
	if state.transform.k < 0.5 {
		return;
	}
	let (x0, y0) = state.screen_to_graph(0.0, 0.0);
	let (x1, y1) = state.screen_to_graph(state.width, state.height);

	ctx.set_fill_style_str("#cbd5e1");
	let mut gx = (x0 / GRID_GAP).floor() * GRID_GAP;
	while gx <= x1 {
		let mut gy = (y0 / GRID_GAP).floor() * GRID_GAP;
		while gy <= y1 {
			ctx.fill_rect(gx, gy, 1.0, 1.0);
			gy += GRID_GAP;
		}
		gx += GRID_GAP;
	}
}

fn draw_edges(
	state: &CanvasState,
	store: &GraphStore,
	selection: &SelectionController,
	ctx: &CanvasRenderingContext2d,
) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k, 8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);

	for edge in store.edges() {
		let (Some(source), Some(target)) = (store.node(&edge.source), store.node(&edge.target)) else {
			continue;
		};
		let (x1, y1) = source_anchor(source);
		let (x2, y2) = target_anchor(target);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let selected = selection.is_edge(&edge.id);
		let color = if selected { SELECTED_COLOR } else { EDGE_COLOR };
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(if selected { line_width * 1.8 } else { line_width });
		if edge.animated {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2 - ux * arrow_size, y2 - uy * arrow_size);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		ctx.set_fill_style_str(color);
		let (back_x, back_y) = (x2 - ux * arrow_size, y2 - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_pending_link(state: &CanvasState, store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	if !state.link.active {
		return;
	}
	let Some(source) = state.link.source_id.as_deref().and_then(|id| store.node(id)) else {
		return;
	};
	let k = state.transform.k;
	let (x1, y1) = source_anchor(source);

	ctx.set_stroke_style_str(SELECTED_COLOR);
	ctx.set_line_width(1.5 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0 / k),
		&JsValue::from_f64(4.0 / k),
	));
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(state.link.cursor_x, state.link.cursor_y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(
	state: &CanvasState,
	store: &GraphStore,
	selection: &SelectionController,
	ctx: &CanvasRenderingContext2d,
) {
	let k = state.transform.k;
	for node in store.nodes() {
		let (x, y) = (node.position.x, node.position.y);
		let selected = selection.is_node(&node.id);

		if selected {
			rounded_rect(ctx, x - 3.0, y - 3.0, NODE_WIDTH + 6.0, NODE_HEIGHT + 6.0, CARD_RADIUS + 3.0);
			ctx.set_stroke_style_str(SELECTED_COLOR);
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		rounded_rect(ctx, x, y, NODE_WIDTH, NODE_HEIGHT, CARD_RADIUS);
		ctx.set_fill_style_str("#ffffff");
		ctx.fill();
		ctx.set_stroke_style_str(&node.data.color);
		ctx.set_line_width(1.5);
		ctx.stroke();

		let text_width = NODE_WIDTH - 28.0;
		ctx.set_fill_style_str(&node.data.color);
		ctx.set_font("bold 12px sans-serif");
		let _ = ctx.fill_text_with_max_width(&node.data.label, x + 10.0, y + 18.0, text_width);

		ctx.set_fill_style_str("#64748b");
		ctx.set_font("10px sans-serif");
		let _ = ctx.fill_text_with_max_width(&node.data.description, x + 10.0, y + 36.0, text_width);
		ctx.set_fill_style_str("#334155");
		let _ = ctx.fill_text_with_max_width(&node.data.specs, x + 10.0, y + 52.0, text_width);

		// Color swatch in the card's top-right corner.
		ctx.begin_path();
		let _ = ctx.arc(x + NODE_WIDTH - 12.0, y + 14.0, 4.0, 0.0, std::f64::consts::TAU);
		ctx.set_fill_style_str(&node.data.color);
		ctx.fill();

		draw_port(ctx, target_anchor(node), k);
		draw_port(ctx, source_anchor(node), k);
	}
}

fn draw_port(ctx: &CanvasRenderingContext2d, (x, y): (f64, f64), k: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, PORT_RADIUS, 0.0, std::f64::consts::TAU);
	ctx.set_fill_style_str("#ffffff");
	ctx.fill();
	ctx.set_stroke_style_str(SELECTED_COLOR);
	ctx.set_line_width(1.5 / k.max(1.0));
	ctx.stroke();
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
