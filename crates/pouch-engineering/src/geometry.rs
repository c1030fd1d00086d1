// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Component Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Planar areas of the stacked components.

use pouch_types::config::{CellParameters, Footprint};
use pouch_types::constants::MM2_PER_CM2;
use pouch_types::state::AreaSet;

/// Footprint area [cm²] from width and length in mm.
pub fn footprint_area(fp: &Footprint) -> f64 {
    fp.width * fp.length / MM2_PER_CM2
}

/// Single-layer areas of cathode, anode, electrolyte and current collector.
pub fn component_areas(params: &CellParameters) -> AreaSet {
    let d = &params.dimensions;
    AreaSet {
        cathode: footprint_area(&d.cathode),
        anode: footprint_area(&d.anode),
        electrolyte: footprint_area(&d.electrolyte),
        current_collector: footprint_area(&d.current_collector),
    }
}
