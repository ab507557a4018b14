use super::store::GraphStore;
use super::types::{NodeRecord, Position};

pub const NODE_WIDTH: f64 = 168.0;
pub const NODE_HEIGHT: f64 = 72.0;
pub const PORT_RADIUS: f64 = 5.0;
pub const PORT_HIT_RADIUS: f64 = 10.0;
pub const EDGE_HIT_DISTANCE: f64 = 6.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<String>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Position,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// An in-progress connection gesture, from a node's source port to the
/// current cursor point (graph coordinates).
#[derive(Clone, Debug, Default)]
pub struct LinkDrag {
	pub active: bool,
	pub source_id: Option<String>,
	pub cursor_x: f64,
	pub cursor_y: f64,
}

/// Viewport and pointer-interaction state for the schematic canvas.
/// Node and edge records live in the [`GraphStore`]; this struct only
/// knows how to map between screen and graph space and what the pointer
/// is currently doing.
pub struct CanvasState {
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub link: LinkDrag,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

/// Where an edge attaches: out of the bottom-center port, into the
/// top-center port.
pub fn source_anchor(node: &NodeRecord) -> (f64, f64) {
	(node.position.x + NODE_WIDTH / 2.0, node.position.y + NODE_HEIGHT)
}

pub fn target_anchor(node: &NodeRecord) -> (f64, f64) {
	(node.position.x + NODE_WIDTH / 2.0, node.position.y)
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			link: LinkDrag::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under the screen point. Nodes render in store order,
	/// so the last match wins.
	pub fn node_at(&self, store: &GraphStore, sx: f64, sy: f64) -> Option<String> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		store
			.nodes()
			.iter()
			.rev()
			.find(|node| {
				gx >= node.position.x
					&& gx <= node.position.x + NODE_WIDTH
					&& gy >= node.position.y
					&& gy <= node.position.y + NODE_HEIGHT
			})
			.map(|node| node.id.clone())
	}

	/// Node whose source port is under the screen point. Checked before
	/// the node body so a press on the port starts a connection instead
	/// of a move.
	pub fn source_port_at(&self, store: &GraphStore, sx: f64, sy: f64) -> Option<String> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		store
			.nodes()
			.iter()
			.rev()
			.find(|node| {
				let (px, py) = source_anchor(node);
				let (dx, dy) = (gx - px, gy - py);
				(dx * dx + dy * dy).sqrt() < PORT_HIT_RADIUS
			})
			.map(|node| node.id.clone())
	}

	/// Edge whose segment passes within hit distance of the screen
	/// point. Edges with a missing endpoint are skipped rather than hit.
	pub fn edge_at(&self, store: &GraphStore, sx: f64, sy: f64) -> Option<String> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		store
			.edges()
			.iter()
			.rev()
			.find(|edge| {
				let (Some(source), Some(target)) = (store.node(&edge.source), store.node(&edge.target))
				else {
					return false;
				};
				let (x1, y1) = source_anchor(source);
				let (x2, y2) = target_anchor(target);
				segment_distance(gx, gy, x1, y1, x2, y2) < EDGE_HIT_DISTANCE
			})
			.map(|edge| edge.id.clone())
	}

	/// Zoom about the screen point so the graph point under the cursor
	/// stays put.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq > 0.0 {
		(((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
	} else {
		0.0
	};
	let (cx, cy) = (x1 + t * dx, y1 + t * dy);
	let (ex, ey) = (px - cx, py - cy);
	(ex * ex + ey * ey).sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::schematic::types::NodeData;

	fn store_with_node_at(x: f64, y: f64) -> (GraphStore, String) {
		let mut store = GraphStore::new();
		let id = store.add_node(NodeData::palette("CPU"), Some(Position::new(x, y)));
		(store, id)
	}

	#[test]
	fn screen_to_graph_tracks_pan_and_zoom() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.transform = ViewTransform { x: 50.0, y: -20.0, k: 2.0 };
		assert_eq!(state.screen_to_graph(50.0, -20.0), (0.0, 0.0));
		assert_eq!(state.screen_to_graph(250.0, 180.0), (100.0, 100.0));
	}

	#[test]
	fn node_hit_test_respects_the_card_bounds() {
		let state = CanvasState::new(800.0, 600.0);
		let (store, id) = store_with_node_at(100.0, 100.0);

		assert_eq!(state.node_at(&store, 101.0, 101.0), Some(id.clone()));
		assert_eq!(state.node_at(&store, 100.0 + NODE_WIDTH, 100.0 + NODE_HEIGHT), Some(id));
		assert_eq!(state.node_at(&store, 99.0, 100.0), None);
		assert_eq!(state.node_at(&store, 100.0 + NODE_WIDTH + 1.0, 100.0), None);
	}

	#[test]
	fn topmost_node_wins_where_cards_overlap() {
		let state = CanvasState::new(800.0, 600.0);
		let mut store = GraphStore::new();
		let below = store.add_node(NodeData::palette("CPU"), Some(Position::new(0.0, 0.0)));
		let above = store.add_node(NodeData::palette("GPU"), Some(Position::new(20.0, 20.0)));

		assert_eq!(state.node_at(&store, 30.0, 30.0), Some(above));
		assert_eq!(state.node_at(&store, 5.0, 5.0), Some(below));
	}

	#[test]
	fn source_port_sits_at_the_bottom_center() {
		let state = CanvasState::new(800.0, 600.0);
		let (store, id) = store_with_node_at(0.0, 0.0);

		let (px, py) = (NODE_WIDTH / 2.0, NODE_HEIGHT);
		assert_eq!(state.source_port_at(&store, px, py), Some(id));
		assert_eq!(state.source_port_at(&store, px + PORT_HIT_RADIUS + 1.0, py), None);
	}

	#[test]
	fn edge_hit_test_follows_the_segment() {
		let state = CanvasState::new(800.0, 600.0);
		let mut store = GraphStore::new();
		let a = store.add_node(NodeData::palette("CPU"), Some(Position::new(0.0, 0.0)));
		let b = store.add_node(NodeData::palette("GPU"), Some(Position::new(0.0, 300.0)));
		let edge = store.connect(&a, &b).unwrap();

		// Midway between a's source anchor and b's target anchor.
		let x = NODE_WIDTH / 2.0;
		assert_eq!(state.edge_at(&store, x, 200.0), Some(edge));
		assert_eq!(state.edge_at(&store, x + 50.0, 200.0), None);
	}

	#[test]
	fn zoom_keeps_the_cursor_point_fixed() {
		let mut state = CanvasState::new(800.0, 600.0);
		let before = state.screen_to_graph(400.0, 300.0);
		state.zoom_at(400.0, 300.0, -1.0);
		let after = state.screen_to_graph(400.0, 300.0);

		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert!(state.transform.k > 1.0);
	}

	#[test]
	fn zoom_clamps_to_the_scale_limits() {
		let mut state = CanvasState::new(800.0, 600.0);
		for _ in 0..100 {
			state.zoom_at(0.0, 0.0, 1.0);
		}
		assert!(state.transform.k >= 0.1);
		for _ in 0..200 {
			state.zoom_at(0.0, 0.0, -1.0);
		}
		assert!(state.transform.k <= 10.0);
	}
}
