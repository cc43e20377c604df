//! The per-session selection state: one optional part per slot.
//!
//! This is the single source of truth for the current assembly. It is an
//! explicitly owned value handed to the rule engine, the pricing
//! aggregator, and the assignment controller; nothing here is a process
//! global.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::part::{Part, PartKind};
use crate::pricing;

/// Mapping from each of the seven slots to its selected part, if any.
///
/// Serialization matches the persisted JSON shape: one key per slot,
/// `null` for an empty slot. Unknown keys in stored data are ignored and
/// missing keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub cpu: Option<Part>,
    pub motherboard: Option<Part>,
    pub gpu: Option<Part>,
    pub ram: Option<Part>,
    pub storage: Option<Part>,
    pub psu: Option<Part>,
    #[serde(rename = "case")]
    pub chassis: Option<Part>,
}

impl Selection {
    /// The part currently occupying `kind`, if any.
    pub fn get(&self, kind: PartKind) -> Option<&Part> {
        self.slot(kind).as_ref()
    }

    /// Place `part` into its slot.
    ///
    /// Fails with a validation error (leaving the state untouched) when
    /// the part's kind does not match the target slot.
    pub fn set(&mut self, kind: PartKind, part: Part) -> Result<(), CoreError> {
        if part.kind != kind {
            return Err(CoreError::Validation(format!(
                "'{}' is a {} part and cannot occupy the {} slot",
                part.name, part.kind, kind
            )));
        }
        *self.slot_mut(kind) = Some(part);
        Ok(())
    }

    /// Empty a slot, returning the removed part.
    pub fn remove(&mut self, kind: PartKind) -> Option<Part> {
        self.slot_mut(kind).take()
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    /// Occupied slots in canonical display order.
    pub fn occupied(&self) -> impl Iterator<Item = (PartKind, &Part)> {
        PartKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|part| (kind, part)))
    }

    /// Running total over occupied slots.
    pub fn total(&self) -> i64 {
        pricing::total(self)
    }

    fn slot(&self, kind: PartKind) -> &Option<Part> {
        match kind {
            PartKind::Cpu => &self.cpu,
            PartKind::Motherboard => &self.motherboard,
            PartKind::Gpu => &self.gpu,
            PartKind::Ram => &self.ram,
            PartKind::Storage => &self.storage,
            PartKind::Psu => &self.psu,
            PartKind::Case => &self.chassis,
        }
    }

    fn slot_mut(&mut self, kind: PartKind) -> &mut Option<Part> {
        match kind {
            PartKind::Cpu => &mut self.cpu,
            PartKind::Motherboard => &mut self.motherboard,
            PartKind::Gpu => &mut self.gpu,
            PartKind::Ram => &mut self.ram,
            PartKind::Storage => &mut self.storage,
            PartKind::Psu => &mut self.psu,
            PartKind::Case => &mut self.chassis,
        }
    }
}
