//! The authoritative owner of the schematic's nodes and edges.

use thiserror::Error;

use super::types::{
	DEFAULT_POSITION, EdgeRecord, FALLBACK_COLOR, NodeData, NodeRecord, Position, is_hex_color,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	#[error("no node with id `{0}`")]
	NotFound(String),
	#[error("connection endpoint `{0}` does not exist")]
	InvalidEndpoint(String),
}

/// Partial attribute update. Fields left as `None` keep their stored
/// value; fields set to `Some` replace it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePatch {
	pub label: Option<String>,
	pub description: Option<String>,
	pub specs: Option<String>,
	pub color: Option<String>,
	pub position: Option<Position>,
}

impl NodePatch {
	/// Position-only patch, the shape a canvas drag produces.
	pub fn moved_to(position: Position) -> Self {
		Self {
			position: Some(position),
			..Self::default()
		}
	}
}

/// Node and edge records plus the id counters that keep identities
/// unique. Every mutation is a single atomic update; there is no delete
/// operation by design.
#[derive(Clone, Debug)]
pub struct GraphStore {
	nodes: Vec<NodeRecord>,
	edges: Vec<EdgeRecord>,
	next_node: u64,
	next_edge: u64,
}

impl GraphStore {
	pub fn new() -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			next_node: 1,
			next_edge: 1,
		}
	}

	/// The three-node starter schematic the editor opens on.
	pub fn with_demo_graph() -> Self {
		let node = |id: &str, x: f64, y: f64, label: &str, description: &str, specs: &str, color: &str| {
			NodeRecord {
				id: id.into(),
				position: Position::new(x, y),
				data: NodeData {
					label: label.into(),
					description: description.into(),
					specs: specs.into(),
					color: color.into(),
					provenance: None,
				},
			}
		};
		let edge = |id: &str, source: &str, target: &str| EdgeRecord {
			id: id.into(),
			source: source.into(),
			target: target.into(),
			animated: true,
		};
		Self {
			nodes: vec![
				node("1", 250.0, 100.0, "CPU", "Central Processing Unit", "3.5GHz, 8 cores", "#f97316"),
				node("2", 100.0, 300.0, "Memory", "RAM Module", "32GB DDR4", "#0ea5e9"),
				node("3", 400.0, 300.0, "GPU", "Graphics Processing Unit", "8GB VRAM", "#22c55e"),
			],
			edges: vec![edge("e1-2", "1", "2"), edge("e1-3", "1", "3")],
			// Counters start past the seeded ids so allocation never collides.
			next_node: 4,
			next_edge: 1,
		}
	}

	/// Insert a node, defaulting the position when absent and the color
	/// when malformed. Returns the freshly allocated id.
	pub fn add_node(&mut self, mut data: NodeData, position: Option<Position>) -> String {
		if !is_hex_color(&data.color) {
			data.color = FALLBACK_COLOR.into();
		}
		let id = self.next_node.to_string();
		self.next_node += 1;
		self.nodes.push(NodeRecord {
			id: id.clone(),
			position: position.unwrap_or(DEFAULT_POSITION),
			data,
		});
		id
	}

	/// Merge `patch` into the node's attributes, field by field.
	pub fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<(), StoreError> {
		let node = self
			.nodes
			.iter_mut()
			.find(|n| n.id == id)
			.ok_or_else(|| StoreError::NotFound(id.into()))?;
		if let Some(label) = patch.label {
			node.data.label = label;
		}
		if let Some(description) = patch.description {
			node.data.description = description;
		}
		if let Some(specs) = patch.specs {
			node.data.specs = specs;
		}
		if let Some(color) = patch.color {
			node.data.color = color;
		}
		if let Some(position) = patch.position {
			node.position = position;
		}
		Ok(())
	}

	/// Create a directed animated edge. Both endpoints must exist right
	/// now; self-loops and parallel duplicates are allowed.
	pub fn connect(&mut self, source: &str, target: &str) -> Result<String, StoreError> {
		for endpoint in [source, target] {
			if self.node(endpoint).is_none() {
				return Err(StoreError::InvalidEndpoint(endpoint.into()));
			}
		}
		let id = format!("e{}", self.next_edge);
		self.next_edge += 1;
		self.edges.push(EdgeRecord {
			id: id.clone(),
			source: source.into(),
			target: target.into(),
			animated: true,
		});
		Ok(id)
	}

	pub fn nodes(&self) -> &[NodeRecord] {
		&self.nodes
	}

	pub fn edges(&self) -> &[EdgeRecord] {
		&self.edges
	}

	pub fn node(&self, id: &str) -> Option<&NodeRecord> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn edge(&self, id: &str) -> Option<&EdgeRecord> {
		self.edges.iter().find(|e| e.id == id)
	}
}

impl Default for GraphStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::schematic::types::Provenance;

	fn sample_data(label: &str) -> NodeData {
		NodeData {
			label: label.into(),
			description: "desc".into(),
			specs: "specs".into(),
			color: "#112233".into(),
			provenance: None,
		}
	}

	#[test]
	fn add_node_allocates_fresh_ids_and_keeps_attributes() {
		let mut store = GraphStore::with_demo_graph();
		let before: Vec<String> = store.nodes().iter().map(|n| n.id.clone()).collect();

		let id = store.add_node(sample_data("Switch"), Some(Position::new(10.0, 20.0)));
		assert!(!before.contains(&id));

		let node = store.node(&id).unwrap();
		assert_eq!(node.data.label, "Switch");
		assert_eq!(node.data.color, "#112233");
		assert_eq!(node.position, Position::new(10.0, 20.0));
	}

	#[test]
	fn add_node_defaults_position_and_malformed_color() {
		let mut store = GraphStore::new();
		let mut data = sample_data("Router");
		data.color = "purple".into();
		let id = store.add_node(data, None);

		let node = store.node(&id).unwrap();
		assert_eq!(node.position, DEFAULT_POSITION);
		assert_eq!(node.data.color, FALLBACK_COLOR);
	}

	#[test]
	fn add_node_preserves_provenance() {
		let mut store = GraphStore::new();
		let mut data = sample_data("Scanned");
		data.provenance = Some(Provenance {
			barcode: "987654321098".into(),
			manufacturer: "NVIDIA".into(),
			model: "GeForce RTX 4080".into(),
			category: "GPU".into(),
		});
		let id = store.add_node(data, None);
		let stored = store.node(&id).unwrap().data.provenance.as_ref().unwrap();
		assert_eq!(stored.manufacturer, "NVIDIA");
	}

	#[test]
	fn update_node_merges_only_present_fields() {
		let mut store = GraphStore::with_demo_graph();
		let before = store.node("1").unwrap().clone();

		store
			.update_node(
				"1",
				NodePatch {
					label: Some("Main CPU".into()),
					..NodePatch::default()
				},
			)
			.unwrap();

		let after = store.node("1").unwrap();
		assert_eq!(after.data.label, "Main CPU");
		assert_eq!(after.data.description, before.data.description);
		assert_eq!(after.data.specs, before.data.specs);
		assert_eq!(after.data.color, before.data.color);
		assert_eq!(after.position, before.position);
	}

	#[test]
	fn update_node_missing_id_is_not_found() {
		let mut store = GraphStore::with_demo_graph();
		let err = store.update_node("99", NodePatch::default()).unwrap_err();
		assert_eq!(err, StoreError::NotFound("99".into()));
	}

	#[test]
	fn drag_patch_moves_without_touching_attributes() {
		let mut store = GraphStore::with_demo_graph();
		let before = store.node("2").unwrap().data.clone();

		store
			.update_node("2", NodePatch::moved_to(Position::new(-30.0, 75.5)))
			.unwrap();

		let after = store.node("2").unwrap();
		assert_eq!(after.position, Position::new(-30.0, 75.5));
		assert_eq!(after.data, before);
	}

	#[test]
	fn connect_links_existing_nodes_animated() {
		let mut store = GraphStore::with_demo_graph();
		let id = store.connect("2", "3").unwrap();
		let edge = store.edge(&id).unwrap();
		assert_eq!(edge.source, "2");
		assert_eq!(edge.target, "3");
		assert!(edge.animated);
	}

	#[test]
	fn connect_rejects_missing_endpoints_without_mutation() {
		let mut store = GraphStore::with_demo_graph();
		let edges_before = store.edges().len();

		let err = store.connect("1", "99").unwrap_err();
		assert_eq!(err, StoreError::InvalidEndpoint("99".into()));
		let err = store.connect("99", "1").unwrap_err();
		assert_eq!(err, StoreError::InvalidEndpoint("99".into()));

		assert_eq!(store.edges().len(), edges_before);
	}

	#[test]
	fn self_loops_and_parallel_edges_are_permitted() {
		let mut store = GraphStore::with_demo_graph();
		let loop_id = store.connect("1", "1").unwrap();
		assert_eq!(store.edge(&loop_id).unwrap().target, "1");

		let first = store.connect("1", "2").unwrap();
		let second = store.connect("1", "2").unwrap();
		assert_ne!(first, second);
		assert_eq!(
			store.edges().iter().filter(|e| e.source == "1" && e.target == "2").count(),
			2
		);
	}

	#[test]
	fn generated_edge_ids_never_collide_with_the_seed() {
		let mut store = GraphStore::with_demo_graph();
		let id = store.connect("1", "2").unwrap();
		assert!(store.edges().iter().filter(|e| e.id == id).count() == 1);
	}
}
