// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Chemistry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed chemistry selector resolved once from a battery-type identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LIQUID_ELECTROLYTE_MARKER, SOLID_STATE_MARKER};
use crate::error::{CellError, CellResult};

/// Cell chemistry family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chemistry {
    /// All-solid-state: bipolar stack, single-sided electrodes, solid electrolyte.
    SolidState,
    /// Conventional Li-ion: double-sided electrodes, separator, liquid electrolyte.
    LiquidElectrolyte,
}

impl Chemistry {
    /// Infer the chemistry from an identifier such as `ASSB-NMC811` or `LIB-LFP`.
    ///
    /// Exactly one marker must be present.
    pub fn from_identifier(id: &str) -> CellResult<Self> {
        let solid = id.contains(SOLID_STATE_MARKER);
        let liquid = id.contains(LIQUID_ELECTROLYTE_MARKER);
        match (solid, liquid) {
            (true, false) => Ok(Chemistry::SolidState),
            (false, true) => Ok(Chemistry::LiquidElectrolyte),
            _ => Err(CellError::AmbiguousChemistry(id.to_string())),
        }
    }

    pub fn is_liquid_electrolyte(self) -> bool {
        matches!(self, Chemistry::LiquidElectrolyte)
    }
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chemistry::SolidState => write!(f, "solid-state"),
            Chemistry::LiquidElectrolyte => write!(f, "liquid-electrolyte"),
        }
    }
}

/// A registered battery type with its resolved chemistry.
///
/// Obtained from [`crate::config::CellParameters::resolve`], which also
/// guarantees every per-type table needed by the chemistry has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryType {
    id: String,
    chemistry: Chemistry,
}

impl BatteryType {
    pub(crate) fn new(id: &str, chemistry: Chemistry) -> Self {
        BatteryType {
            id: id.to_string(),
            chemistry,
        }
    }

    /// Identifier used as key in every per-type table.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn chemistry(&self) -> Chemistry {
        self.chemistry
    }
}

impl fmt::Display for BatteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.chemistry)
    }
}
