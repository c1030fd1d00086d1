// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Cell Envelope
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Outer surface (casing sizing) and internal volume (energy density).

use pouch_types::config::CellParameters;
use pouch_types::constants::MM_PER_CM;

/// Box surface area [cm²] of the nominal outer envelope.
///
/// `A = 2 (w l + w h + l h)` with the total-cell footprint.
pub fn surface_area(params: &CellParameters, cell_height: f64) -> f64 {
    let width = params.dimensions.total_cell.width / MM_PER_CM;
    let length = params.dimensions.total_cell.length / MM_PER_CM;
    let height = cell_height / MM_PER_CM;
    2.0 * (width * length + width * height + length * height)
}

/// Box volume [cm³] of the electrolyte footprint plus one container wall on
/// each side.
pub fn total_volume(params: &CellParameters, cell_height: f64) -> f64 {
    let wall = params.thicknesses.cell_container_thickness;
    let electrolyte = &params.dimensions.electrolyte;
    let length = (electrolyte.length + 2.0 * wall) / MM_PER_CM;
    let width = (electrolyte.width + 2.0 * wall) / MM_PER_CM;
    width * length * (cell_height / MM_PER_CM)
}
