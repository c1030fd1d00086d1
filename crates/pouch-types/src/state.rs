// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Planar areas of one layer of each component [cm²].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaSet {
    pub cathode: f64,
    pub anode: f64,
    pub electrolyte: f64,
    pub current_collector: f64,
}

/// One electrode coating, one face, one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectrodeLayer {
    pub thickness: f64,    // mm
    pub density: f64,      // g/cm³
    /// Pore volume [cm³]; `None` for dense lithium-metal anodes.
    pub void_volume: Option<f64>,
}

/// Layer count and the height it actually occupies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackResult {
    pub number_of_layers: u32,
    pub cell_height: f64,      // mm
    pub unit_thickness: f64,   // mm
    pub available_height: f64, // mm
}

impl StackResult {
    /// No repeating unit fits in the envelope.
    pub fn is_degenerate(&self) -> bool {
        self.number_of_layers == 0
    }
}

/// Per-layer quantities gathered before the mass balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntermediateResults {
    pub cathode_density: f64,
    pub number_of_layers: u32,
    pub cell_height: f64,
    pub total_surface_area: f64,
    pub cathode_void_volume: f64,
    pub anode_void_volume: Option<f64>,
}

/// Cell-level performance figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    pub total_mass: f64,      // g
    pub cell_capacity: f64,   // Wh
    pub specific_energy: f64, // Wh/kg
    pub energy_density: f64,  // Wh/L
    pub cell_volume: f64,     // cm³
}
