//! Build snapshot models and DTOs.
//!
//! A build is a named, immutable snapshot of a selection: one nullable
//! part reference per slot plus the total price computed at save time
//! (never recomputed on read).

use rigforge_core::part::Part;
use rigforge_core::selection::Selection;
use rigforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `builds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRow {
    pub id: DbId,
    pub name: String,
    pub cpu_id: Option<DbId>,
    pub motherboard_id: Option<DbId>,
    pub gpu_id: Option<DbId>,
    pub ram_id: Option<DbId>,
    pub storage_id: Option<DbId>,
    pub psu_id: Option<DbId>,
    pub case_id: Option<DbId>,
    pub total_price: i64,
    pub created_at: Timestamp,
}

impl BuildRow {
    /// Referenced part ids, occupied slots only.
    pub fn part_ids(&self) -> Vec<DbId> {
        [
            self.cpu_id,
            self.motherboard_id,
            self.gpu_id,
            self.ram_id,
            self.storage_id,
            self.psu_id,
            self.case_id,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A part reference as accepted by the save endpoint: either a bare id or
/// an embedded part object, of which only the id is kept. Full objects
/// are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PartRef {
    Id(DbId),
    Embedded { id: DbId },
}

impl PartRef {
    pub fn id(self) -> DbId {
        match self {
            Self::Id(id) | Self::Embedded { id } => id,
        }
    }
}

/// The slot map of a save request. Unknown slot keys are ignored; absent
/// or null slots stay empty.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SelectedPartRefs {
    pub cpu: Option<PartRef>,
    pub motherboard: Option<PartRef>,
    pub gpu: Option<PartRef>,
    pub ram: Option<PartRef>,
    pub storage: Option<PartRef>,
    pub psu: Option<PartRef>,
    #[serde(rename = "case")]
    pub chassis: Option<PartRef>,
}

impl SelectedPartRefs {
    /// Project every reference down to its identifier.
    pub fn project(&self) -> BuildPartIds {
        BuildPartIds {
            cpu: self.cpu.map(PartRef::id),
            motherboard: self.motherboard.map(PartRef::id),
            gpu: self.gpu.map(PartRef::id),
            ram: self.ram.map(PartRef::id),
            storage: self.storage.map(PartRef::id),
            psu: self.psu.map(PartRef::id),
            chassis: self.chassis.map(PartRef::id),
        }
    }
}

/// Projected per-slot part ids, ready to bind to the insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildPartIds {
    pub cpu: Option<DbId>,
    pub motherboard: Option<DbId>,
    pub gpu: Option<DbId>,
    pub ram: Option<DbId>,
    pub storage: Option<DbId>,
    pub psu: Option<DbId>,
    pub chassis: Option<DbId>,
}

/// DTO for saving a build.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuild {
    pub name: Option<String>,
    #[serde(default)]
    pub parts: SelectedPartRefs,
    pub total_price: i64,
}

/// The slot map of a build with referenced parts resolved for display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedParts {
    pub cpu: Option<Part>,
    pub motherboard: Option<Part>,
    pub gpu: Option<Part>,
    pub ram: Option<Part>,
    pub storage: Option<Part>,
    pub psu: Option<Part>,
    #[serde(rename = "case")]
    pub chassis: Option<Part>,
}

/// Importing a shared build replaces the selection wholesale: every slot
/// is overwritten, dangling references import as empty.
impl From<ResolvedParts> for Selection {
    fn from(parts: ResolvedParts) -> Self {
        Selection {
            cpu: parts.cpu,
            motherboard: parts.motherboard,
            gpu: parts.gpu,
            ram: parts.ram,
            storage: parts.storage,
            psu: parts.psu,
            chassis: parts.chassis,
        }
    }
}

/// A single build expanded for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDetail {
    pub id: DbId,
    pub name: String,
    pub parts: ResolvedParts,
    pub total_price: i64,
    pub created_at: Timestamp,
}
