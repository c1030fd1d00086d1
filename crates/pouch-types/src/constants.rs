// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed conversion factors used inline at each formula site.
//!
//! Footprints are given in mm, thicknesses in mm, areas in cm²,
//! volumes in cm³, masses in g.

/// mm × mm → cm².
pub const MM2_PER_CM2: f64 = 100.0;

/// mm → cm.
pub const MM_PER_CM: f64 = 10.0;

/// mg → g.
pub const MG_PER_G: f64 = 1000.0;

/// Wh → kWh.
pub const WH_PER_KWH: f64 = 1000.0;

/// mAh/g × g × V → Wh.
pub const MAH_V_TO_WH: f64 = 0.001;

/// g → kg, used for specific energy [Wh/kg].
pub const G_TO_KG: f64 = 0.001;

/// cm³ → L, used for energy density [Wh/L].
pub const CM3_TO_L: f64 = 0.001;

/// Chemistry marker for all-solid-state identifiers.
pub const SOLID_STATE_MARKER: &str = "ASSB";

/// Chemistry marker for liquid-electrolyte identifiers.
pub const LIQUID_ELECTROLYTE_MARKER: &str = "LIB";
