//! Record types shared by the graph store, the catalog, and the
//! resolution workflow.

/// Color applied to components placed from the palette.
pub const PALETTE_COLOR: &str = "#a855f7";
/// Color applied to custom-entered components when none is chosen.
pub const CUSTOM_COLOR: &str = "#8b5cf6";
/// Neutral gray used for unknown-barcode placeholders.
pub const UNKNOWN_COLOR: &str = "#6b7280";
/// Substitute for malformed or missing colors at insert time.
pub const FALLBACK_COLOR: &str = "#64748b";

/// Placement point for nodes added without an explicit position.
pub const DEFAULT_POSITION: Position = Position { x: 100.0, y: 100.0 };

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Origin of a node that came out of a catalog lookup or custom entry.
/// Palette nodes carry no provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provenance {
	pub barcode: String,
	pub manufacturer: String,
	pub model: String,
	pub category: String,
}

/// Displayable attributes of a node, without identity or placement.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeData {
	pub label: String,
	pub description: String,
	pub specs: String,
	pub color: String,
	pub provenance: Option<Provenance>,
}

impl NodeData {
	/// Default attribute set for a palette component of the given kind.
	pub fn palette(kind: &str) -> Self {
		Self {
			label: format!("New {kind}"),
			description: format!("Description for {kind}"),
			specs: "Specifications".into(),
			color: PALETTE_COLOR.into(),
			provenance: None,
		}
	}
}

/// One vertex of the schematic.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRecord {
	pub id: String,
	pub position: Position,
	pub data: NodeData,
}

/// A directed link between two nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
	pub id: String,
	pub source: String,
	pub target: String,
	pub animated: bool,
}

/// A component's attribute bundle as produced by the catalog, the
/// unknown-barcode fallback, or custom entry. Has no graph identity or
/// position; both are assigned when the store accepts it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentRecord {
	pub barcode: String,
	pub name: String,
	pub manufacturer: String,
	pub model: String,
	pub description: String,
	pub specs: String,
	pub color: String,
	pub category: String,
}

impl From<ComponentRecord> for NodeData {
	fn from(record: ComponentRecord) -> Self {
		Self {
			label: record.name,
			description: record.description,
			specs: record.specs,
			color: record.color,
			provenance: Some(Provenance {
				barcode: record.barcode,
				manufacturer: record.manufacturer,
				model: record.model,
				category: record.category,
			}),
		}
	}
}

/// Whether `value` is a well-formed `#rrggbb` color.
pub fn is_hex_color(value: &str) -> bool {
	let Some(digits) = value.strip_prefix('#') else {
		return false;
	};
	digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_color_accepts_six_digit_forms() {
		assert!(is_hex_color("#a855f7"));
		assert!(is_hex_color("#0071C5"));
	}

	#[test]
	fn hex_color_rejects_everything_else() {
		assert!(!is_hex_color(""));
		assert!(!is_hex_color("a855f7"));
		assert!(!is_hex_color("#fff"));
		assert!(!is_hex_color("#a855f75"));
		assert!(!is_hex_color("#a855fg"));
	}

	#[test]
	fn palette_defaults_follow_the_kind() {
		let data = NodeData::palette("Router");
		assert_eq!(data.label, "New Router");
		assert_eq!(data.description, "Description for Router");
		assert_eq!(data.specs, "Specifications");
		assert_eq!(data.color, PALETTE_COLOR);
		assert!(data.provenance.is_none());
	}

	#[test]
	fn component_record_converts_with_provenance() {
		let record = ComponentRecord {
			barcode: "123456789012".into(),
			name: "Intel Core i7-13700K".into(),
			manufacturer: "Intel".into(),
			model: "i7-13700K".into(),
			description: "13th Gen Intel Core Processor".into(),
			specs: "16 cores".into(),
			color: "#0071c5".into(),
			category: "CPU".into(),
		};
		let data: NodeData = record.into();
		assert_eq!(data.label, "Intel Core i7-13700K");
		let provenance = data.provenance.expect("catalog records carry provenance");
		assert_eq!(provenance.barcode, "123456789012");
		assert_eq!(provenance.category, "CPU");
	}
}
