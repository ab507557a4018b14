//! Barcode-to-candidate resolution workflow.
//!
//! A short-lived state machine: `Idle → Resolving → Resolved | Fallback`.
//! The simulated lookup latency lives outside the machine — `begin_*`
//! hands back a [`ResolveTicket`], the caller schedules a timer, and
//! [`ResolutionWorkflow::settle`] only acts if that ticket is still the
//! live one. Cancelling (or superseding) a resolution therefore turns
//! the pending timer callback into a no-op instead of a stale mutation.

use std::time::Duration;

use thiserror::Error;

use super::catalog::Catalog;
use super::types::{CUSTOM_COLOR, ComponentRecord, UNKNOWN_COLOR, is_hex_color};

/// Simulated camera scan latency.
pub const CAMERA_SCAN_DELAY: Duration = Duration::from_millis(2000);
/// Simulated manual lookup latency.
pub const MANUAL_LOOKUP_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
	#[error("a resolution is already in flight")]
	ConcurrentResolution,
	#[error("barcode must not be empty")]
	EmptyIdentifier,
}

/// Token tying a scheduled settle back to the trigger that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
enum ResolvePath {
	Camera,
	Manual { barcode: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionState {
	Idle,
	Resolving { ticket: ResolveTicket },
	Resolved(ComponentRecord),
	Fallback(ComponentRecord),
}

/// User-entered fields for the custom path. Empty fields take defaults
/// at submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomDraft {
	pub name: String,
	pub manufacturer: String,
	pub model: String,
	pub description: String,
	pub specs: String,
	pub color: String,
}

/// One resolution workflow instance. Holds at most one live candidate;
/// a new trigger discards a settled result, and a trigger while a
/// resolution is in flight is rejected outright.
#[derive(Clone, Debug)]
pub struct ResolutionWorkflow {
	state: ResolutionState,
	path: Option<ResolvePath>,
	next_ticket: u64,
	camera_seq: u64,
	custom_seq: u64,
}

impl ResolutionWorkflow {
	pub fn new() -> Self {
		Self {
			state: ResolutionState::Idle,
			path: None,
			next_ticket: 0,
			camera_seq: 0,
			custom_seq: 0,
		}
	}

	pub fn state(&self) -> &ResolutionState {
		&self.state
	}

	pub fn is_resolving(&self) -> bool {
		matches!(self.state, ResolutionState::Resolving { .. })
	}

	/// The settled candidate, if any.
	pub fn candidate(&self) -> Option<&ComponentRecord> {
		match &self.state {
			ResolutionState::Resolved(record) | ResolutionState::Fallback(record) => Some(record),
			_ => None,
		}
	}

	/// Start a camera scan. Settles to an arbitrary catalog entry, so
	/// this path never falls back.
	pub fn begin_camera(&mut self) -> Result<ResolveTicket, WorkflowError> {
		self.begin(ResolvePath::Camera)
	}

	/// Start a manual lookup for `barcode` (trimmed, must be non-empty).
	pub fn begin_manual(&mut self, barcode: &str) -> Result<ResolveTicket, WorkflowError> {
		let barcode = barcode.trim();
		if barcode.is_empty() {
			return Err(WorkflowError::EmptyIdentifier);
		}
		self.begin(ResolvePath::Manual {
			barcode: barcode.into(),
		})
	}

	fn begin(&mut self, path: ResolvePath) -> Result<ResolveTicket, WorkflowError> {
		if self.is_resolving() {
			return Err(WorkflowError::ConcurrentResolution);
		}
		let ticket = ResolveTicket(self.next_ticket);
		self.next_ticket += 1;
		self.state = ResolutionState::Resolving { ticket };
		self.path = Some(path);
		Ok(ticket)
	}

	/// Complete an in-flight resolution. Ignored unless `ticket` is the
	/// one the live resolution was started with — a cancelled or
	/// superseded trigger settles nothing.
	pub fn settle(&mut self, ticket: ResolveTicket, catalog: &dyn Catalog) -> Option<&ComponentRecord> {
		match self.state {
			ResolutionState::Resolving { ticket: live } if live == ticket => {}
			_ => return None,
		}
		self.state = match self.path.take() {
			Some(ResolvePath::Camera) => {
				let barcodes = catalog.barcodes();
				if barcodes.is_empty() {
					ResolutionState::Fallback(placeholder(""))
				} else {
					// Rotate through the key set; every pick is a hit.
					let pick = barcodes[self.camera_seq as usize % barcodes.len()];
					self.camera_seq += 1;
					match catalog.lookup(pick).cloned() {
						Some(record) => ResolutionState::Resolved(record),
						None => ResolutionState::Fallback(placeholder(pick)),
					}
				}
			}
			Some(ResolvePath::Manual { barcode }) => match catalog.lookup(&barcode) {
				Some(record) => ResolutionState::Resolved(record.clone()),
				None => ResolutionState::Fallback(placeholder(&barcode)),
			},
			None => ResolutionState::Idle,
		};
		self.candidate()
	}

	/// Build a candidate from user-entered fields, no latency involved.
	/// Returns a copy of the record; the live candidate stays in the
	/// machine until committed or discarded.
	pub fn submit_custom(&mut self, draft: &CustomDraft) -> Result<ComponentRecord, WorkflowError> {
		if self.is_resolving() {
			return Err(WorkflowError::ConcurrentResolution);
		}
		self.custom_seq += 1;
		let field = |value: &str, default: &str| {
			let value = value.trim();
			if value.is_empty() { default.into() } else { value.to_owned() }
		};
		let record = ComponentRecord {
			barcode: format!("custom-{}", self.custom_seq),
			name: field(&draft.name, "Custom Component"),
			manufacturer: field(&draft.manufacturer, "Unknown"),
			model: field(&draft.model, "Unknown"),
			description: field(&draft.description, "Custom component"),
			specs: field(&draft.specs, "No specifications provided"),
			color: if is_hex_color(draft.color.trim()) {
				draft.color.trim().into()
			} else {
				CUSTOM_COLOR.into()
			},
			category: "Custom".into(),
		};
		self.state = ResolutionState::Resolved(record.clone());
		self.path = None;
		Ok(record)
	}

	/// Hand over the settled candidate and return to `Idle`. `None`
	/// while idle or still resolving.
	pub fn take_candidate(&mut self) -> Option<ComponentRecord> {
		match std::mem::replace(&mut self.state, ResolutionState::Idle) {
			ResolutionState::Resolved(record) | ResolutionState::Fallback(record) => Some(record),
			other => {
				self.state = other;
				None
			}
		}
	}

	/// Discard any candidate or in-flight resolution. A settle arriving
	/// afterwards with the old ticket is ignored.
	pub fn cancel(&mut self) {
		self.state = ResolutionState::Idle;
		self.path = None;
	}
}

impl Default for ResolutionWorkflow {
	fn default() -> Self {
		Self::new()
	}
}

fn placeholder(barcode: &str) -> ComponentRecord {
	ComponentRecord {
		barcode: barcode.into(),
		name: "Unknown Component".into(),
		manufacturer: "Unknown".into(),
		model: "Unknown".into(),
		description: "Component not found in database".into(),
		specs: "Please enter specifications manually".into(),
		color: UNKNOWN_COLOR.into(),
		category: "Unknown".into(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::schematic::catalog::StaticCatalog;

	#[test]
	fn manual_hit_resolves_the_catalog_record() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();

		let ticket = workflow.begin_manual("123456789012").unwrap();
		assert!(workflow.is_resolving());
		assert!(workflow.candidate().is_none());

		let record = workflow.settle(ticket, &catalog).expect("settles");
		assert_eq!(record.manufacturer, "Intel");
		assert_eq!(record.category, "CPU");
		assert!(matches!(workflow.state(), ResolutionState::Resolved(_)));
	}

	#[test]
	fn manual_miss_falls_back_and_preserves_the_barcode() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();

		let ticket = workflow.begin_manual("doesnotexist").unwrap();
		workflow.settle(ticket, &catalog);

		match workflow.state() {
			ResolutionState::Fallback(record) => {
				assert_eq!(record.barcode, "doesnotexist");
				assert_eq!(record.name, "Unknown Component");
				assert_eq!(record.category, "Unknown");
				assert_eq!(record.color, UNKNOWN_COLOR);
			}
			other => panic!("expected fallback, got {other:?}"),
		}
	}

	#[test]
	fn manual_rejects_blank_barcodes() {
		let mut workflow = ResolutionWorkflow::new();
		assert_eq!(workflow.begin_manual("").unwrap_err(), WorkflowError::EmptyIdentifier);
		assert_eq!(workflow.begin_manual("   ").unwrap_err(), WorkflowError::EmptyIdentifier);
		assert!(matches!(workflow.state(), ResolutionState::Idle));
	}

	#[test]
	fn camera_always_hits_the_catalog() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();

		for _ in 0..8 {
			let ticket = workflow.begin_camera().unwrap();
			let record = workflow.settle(ticket, &catalog).expect("camera settles");
			assert!(catalog.lookup(&record.barcode).is_some());
			workflow.take_candidate();
		}
	}

	#[test]
	fn camera_rotates_across_the_key_set() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();
		let mut seen = Vec::new();

		for _ in 0..4 {
			let ticket = workflow.begin_camera().unwrap();
			seen.push(workflow.settle(ticket, &catalog).unwrap().barcode.clone());
			workflow.take_candidate();
		}
		seen.sort();
		seen.dedup();
		assert_eq!(seen.len(), 4);
	}

	#[test]
	fn concurrent_triggers_are_rejected_not_queued() {
		let mut workflow = ResolutionWorkflow::new();
		let ticket = workflow.begin_manual("123456789012").unwrap();

		assert_eq!(workflow.begin_camera().unwrap_err(), WorkflowError::ConcurrentResolution);
		assert_eq!(
			workflow.begin_manual("987654321098").unwrap_err(),
			WorkflowError::ConcurrentResolution
		);
		assert_eq!(
			workflow.submit_custom(&CustomDraft::default()).unwrap_err(),
			WorkflowError::ConcurrentResolution
		);

		// The original resolution is still the live one.
		let record = workflow.settle(ticket, &StaticCatalog::new()).unwrap();
		assert_eq!(record.manufacturer, "Intel");
	}

	#[test]
	fn cancel_makes_the_pending_settle_a_no_op() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();

		let ticket = workflow.begin_manual("123456789012").unwrap();
		workflow.cancel();

		assert!(workflow.settle(ticket, &catalog).is_none());
		assert!(matches!(workflow.state(), ResolutionState::Idle));
		assert!(workflow.take_candidate().is_none());
	}

	#[test]
	fn a_new_trigger_discards_the_previous_result_and_stale_tickets() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();

		let first = workflow.begin_manual("123456789012").unwrap();
		workflow.settle(first, &catalog);
		assert!(workflow.candidate().is_some());

		let second = workflow.begin_manual("doesnotexist").unwrap();
		assert!(workflow.candidate().is_none());

		// The consumed first ticket no longer matches anything.
		assert!(workflow.settle(first, &catalog).is_none());
		assert!(workflow.is_resolving());

		workflow.settle(second, &catalog);
		assert!(matches!(workflow.state(), ResolutionState::Fallback(_)));
	}

	#[test]
	fn custom_defaults_fill_empty_fields() {
		let mut workflow = ResolutionWorkflow::new();
		let record = workflow.submit_custom(&CustomDraft::default()).unwrap();

		assert_eq!(record.name, "Custom Component");
		assert_eq!(record.manufacturer, "Unknown");
		assert_eq!(record.model, "Unknown");
		assert_eq!(record.description, "Custom component");
		assert_eq!(record.specs, "No specifications provided");
		assert_eq!(record.color, CUSTOM_COLOR);
		assert_eq!(record.category, "Custom");
	}

	#[test]
	fn custom_barcodes_are_unique_per_submission() {
		let mut workflow = ResolutionWorkflow::new();
		let first = workflow.submit_custom(&CustomDraft::default()).unwrap().barcode;
		workflow.take_candidate();
		let second = workflow.submit_custom(&CustomDraft::default()).unwrap().barcode;
		assert_ne!(first, second);
	}

	#[test]
	fn custom_keeps_user_fields_and_valid_colors() {
		let mut workflow = ResolutionWorkflow::new();
		let record = workflow
			.submit_custom(&CustomDraft {
				name: "Intel Core i5".into(),
				manufacturer: "Intel".into(),
				color: "#123abc".into(),
				..CustomDraft::default()
			})
			.unwrap();
		assert_eq!(record.name, "Intel Core i5");
		assert_eq!(record.manufacturer, "Intel");
		assert_eq!(record.color, "#123abc");
	}

	#[test]
	fn take_candidate_ends_the_instance() {
		let catalog = StaticCatalog::new();
		let mut workflow = ResolutionWorkflow::new();

		let ticket = workflow.begin_manual("789123456789").unwrap();
		workflow.settle(ticket, &catalog);

		let record = workflow.take_candidate().expect("candidate ready");
		assert_eq!(record.manufacturer, "Samsung");
		assert!(matches!(workflow.state(), ResolutionState::Idle));
		assert!(workflow.take_candidate().is_none());
	}
}
