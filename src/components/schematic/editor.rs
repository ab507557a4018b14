//! Draft-and-commit editing of a selected node's attributes.

use super::store::{GraphStore, NodePatch, StoreError};
use super::types::NodeRecord;

/// An editable copy of one node's attribute fields. Edits land here,
/// not in the store; the store only sees them on an explicit commit
/// (the inspector commits on field blur, plus immediately for color).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeDraft {
	node_id: String,
	pub label: String,
	pub description: String,
	pub specs: String,
	pub color: String,
}

impl AttributeDraft {
	/// Seed a draft from the node as currently stored.
	pub fn seed(node: &NodeRecord) -> Self {
		Self {
			node_id: node.id.clone(),
			label: node.data.label.clone(),
			description: node.data.description.clone(),
			specs: node.data.specs.clone(),
			color: node.data.color.clone(),
		}
	}

	pub fn node_id(&self) -> &str {
		&self.node_id
	}

	/// Push the whole draft into the store.
	pub fn commit(&self, store: &mut GraphStore) -> Result<(), StoreError> {
		store.update_node(
			&self.node_id,
			NodePatch {
				label: Some(self.label.clone()),
				description: Some(self.description.clone()),
				specs: Some(self.specs.clone()),
				color: Some(self.color.clone()),
				position: None,
			},
		)
	}

	/// Push only the draft's color; the picker and the color text field
	/// both commit on every change.
	pub fn commit_color(&self, store: &mut GraphStore) -> Result<(), StoreError> {
		store.update_node(
			&self.node_id,
			NodePatch {
				color: Some(self.color.clone()),
				..NodePatch::default()
			},
		)
	}
}
