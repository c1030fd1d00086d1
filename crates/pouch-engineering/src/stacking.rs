// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Layer Stacking
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! How many repeating units fit inside the benchmark envelope.

use pouch_types::chemistry::{BatteryType, Chemistry};
use pouch_types::config::{required, CellParameters};
use pouch_types::error::{CellError, CellResult};
use pouch_types::state::StackResult;
use tracing::{debug, warn};

use crate::electrode::{anode_thickness, cathode_layer};

/// Benchmark height minus both container walls [mm].
pub fn available_height(params: &CellParameters) -> f64 {
    params.dimensions.cell_height_benchmark - 2.0 * params.thicknesses.cell_container_thickness
}

/// Thickness of one repeating unit [mm].
///
/// Solid-state cells stack bipolar units (anode | Al foil | cathode |
/// electrolyte). Liquid-electrolyte cells stack double-sided units
/// (2 anode faces | Cu foil | 2 cathode faces | Al foil | 2 separators).
pub fn unit_thickness(params: &CellParameters, battery_type: &BatteryType) -> CellResult<f64> {
    let id = battery_type.id();
    let t = &params.thicknesses;
    let cathode = cathode_layer(params, battery_type)?.thickness;
    let anode = anode_thickness(params, battery_type)?;

    let unit = match battery_type.chemistry() {
        Chemistry::SolidState => {
            anode + t.aluminum_foil + cathode + t.electrolyte.get("thicknesses.electrolyte", id)?
        }
        Chemistry::LiquidElectrolyte => {
            anode * 2.0
                + t.aluminum_foil
                + cathode * 2.0
                + required(t.copper_foil, "thicknesses.copper_foil")?
                + t.separator.get("thicknesses.separator", id)? * 2.0
        }
    };
    Ok(unit)
}

/// Whole units that fit in `available` [mm]; truncates, never rounds up.
pub fn layers_in(available: f64, unit: f64) -> u32 {
    let n = (available / unit).floor();
    if n.is_finite() && n > 0.0 {
        n as u32
    } else {
        0
    }
}

/// Layer count and actual stacked height.
///
/// A unit thicker than the available height yields zero layers and zero
/// height; callers needing masses reject that via `is_degenerate`.
pub fn stack(params: &CellParameters, battery_type: &BatteryType) -> CellResult<StackResult> {
    let available = available_height(params);
    let unit = unit_thickness(params, battery_type)?;
    if unit <= 0.0 || !unit.is_finite() {
        return Err(CellError::PhysicsViolation(format!(
            "unit thickness must be positive, got {unit} mm"
        )));
    }

    let number_of_layers = layers_in(available, unit);
    let result = StackResult {
        number_of_layers,
        cell_height: unit * number_of_layers as f64,
        unit_thickness: unit,
        available_height: available,
    };

    if result.is_degenerate() {
        warn!(
            battery_type = battery_type.id(),
            unit_thickness_mm = unit,
            available_height_mm = available,
            "no repeating unit fits in the benchmark height"
        );
    } else {
        debug!(
            battery_type = battery_type.id(),
            layers = number_of_layers,
            cell_height_mm = result.cell_height,
            "stack"
        );
    }
    Ok(result)
}
