//! Catalog part model: slot categories, compatibility metadata, and the
//! part record itself.
//!
//! Parts are read-only reference data from the builder's perspective;
//! catalog administration happens out of band (seed migrations).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Slot categories
// ---------------------------------------------------------------------------

/// The seven fixed component categories a build can hold one part for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Cpu,
    Motherboard,
    Gpu,
    Ram,
    Storage,
    Psu,
    Case,
}

impl PartKind {
    /// All slot categories in canonical display order.
    pub const ALL: [PartKind; 7] = [
        PartKind::Cpu,
        PartKind::Motherboard,
        PartKind::Gpu,
        PartKind::Ram,
        PartKind::Storage,
        PartKind::Psu,
        PartKind::Case,
    ];

    /// Canonical lowercase identifier, as stored in the database and used
    /// in URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Motherboard => "motherboard",
            Self::Gpu => "gpu",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Psu => "psu",
            Self::Case => "case",
        }
    }

    /// Human-readable slot label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "Processor",
            Self::Motherboard => "Motherboard",
            Self::Gpu => "Graphics Card",
            Self::Ram => "Memory",
            Self::Storage => "Storage",
            Self::Psu => "Power Supply",
            Self::Case => "Chassis",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(Self::Cpu),
            "motherboard" => Ok(Self::Motherboard),
            "gpu" => Ok(Self::Gpu),
            "ram" => Ok(Self::Ram),
            "storage" => Ok(Self::Storage),
            "psu" => Ok(Self::Psu),
            "case" => Ok(Self::Case),
            other => Err(CoreError::Validation(format!(
                "Unknown part kind '{other}'. Valid kinds: cpu, motherboard, gpu, ram, storage, psu, case"
            ))),
        }
    }
}

impl TryFrom<String> for PartKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Compatibility metadata
// ---------------------------------------------------------------------------

/// Partial compatibility record attached to every part.
///
/// Which fields are meaningful depends on the part kind: only cpus and
/// motherboards carry a comparable `socket`, `wattage` is power draw for
/// cpu/gpu but capacity for a psu, and `slots` is used by ram. The rule
/// engine skips any check whose inputs are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(rename = "formFactor", skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wattage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<i32>,
}

// ---------------------------------------------------------------------------
// Part record
// ---------------------------------------------------------------------------

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PartKind,
    pub brand: String,
    /// Non-negative, in the smallest currency unit.
    pub price: i64,
    /// Open, category-specific attribute map (core count, VRAM, ...).
    #[serde(default)]
    pub specs: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub compatibility: Compatibility,
}
