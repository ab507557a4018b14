//! Barcode-to-component lookup.
//!
//! The lookup is injected into the resolution workflow as `&dyn Catalog`
//! rather than read from a module-level table, so tests can substitute
//! their own catalogs.

use super::types::ComponentRecord;

/// Read-only component lookup service.
pub trait Catalog {
	/// Canonical record for `barcode`, if the catalog knows it. A miss is
	/// a normal outcome, not an error.
	fn lookup(&self, barcode: &str) -> Option<&ComponentRecord>;

	/// Every barcode the catalog can resolve, in stable order. The camera
	/// path draws its picks from this set.
	fn barcodes(&self) -> Vec<&str>;
}

/// The built-in catalog of known component specifications.
pub struct StaticCatalog {
	records: Vec<ComponentRecord>,
}

impl StaticCatalog {
	pub fn new() -> Self {
		let entry = |barcode: &str,
		             name: &str,
		             manufacturer: &str,
		             model: &str,
		             description: &str,
		             specs: &str,
		             color: &str,
		             category: &str| ComponentRecord {
			barcode: barcode.into(),
			name: name.into(),
			manufacturer: manufacturer.into(),
			model: model.into(),
			description: description.into(),
			specs: specs.into(),
			color: color.into(),
			category: category.into(),
		};
		Self {
			records: vec![
				entry(
					"123456789012",
					"Intel Core i7-13700K",
					"Intel",
					"i7-13700K",
					"13th Gen Intel Core Processor",
					"16 cores, 24 threads, 3.4GHz base, 5.4GHz boost, 125W TDP",
					"#0071c5",
					"CPU",
				),
				entry(
					"987654321098",
					"NVIDIA RTX 4080",
					"NVIDIA",
					"GeForce RTX 4080",
					"High-performance graphics card",
					"16GB GDDR6X, 2505MHz boost clock, 320W TDP",
					"#76b900",
					"GPU",
				),
				entry(
					"456789123456",
					"Corsair Vengeance LPX 32GB",
					"Corsair",
					"CMK32GX4M2E3200C16",
					"DDR4 Memory Kit",
					"32GB (2x16GB), DDR4-3200, CL16, 1.35V",
					"#ffcc00",
					"Memory",
				),
				entry(
					"789123456789",
					"Samsung 980 PRO 2TB",
					"Samsung",
					"MZ-V8P2T0B/AM",
					"NVMe SSD",
					"2TB capacity, PCIe 4.0, 7000MB/s read, 5100MB/s write",
					"#1f8dd6",
					"Storage",
				),
			],
		}
	}
}

impl Default for StaticCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl Catalog for StaticCatalog {
	fn lookup(&self, barcode: &str) -> Option<&ComponentRecord> {
		self.records.iter().find(|r| r.barcode == barcode)
	}

	fn barcodes(&self) -> Vec<&str> {
		self.records.iter().map(|r| r.barcode.as_str()).collect()
	}
}
