// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Cell Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Store-level entry points chaining every stage for one battery type.

use std::collections::BTreeMap;

use pouch_types::chemistry::BatteryType;
use pouch_types::config::CellParameters;
use pouch_types::error::CellResult;
use pouch_types::state::{CellMetrics, IntermediateResults};
use pouch_types::store::ParameterStore;
use serde::Serialize;

use crate::electrode::{cathode_layer, liquid_anode_layer};
use crate::envelope::surface_area;
use crate::manufacturing::{manufacturing_energy, ManufacturingEnergy};
use crate::mass_balance::{pouch_cell, Component, MassBreakdown};
use crate::metrics::{cell_metrics, percentage_composition};
use crate::stacking::stack;

/// Per-layer electrode figures plus stack and envelope.
pub fn calculate_all(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<IntermediateResults> {
    let stack = stack(params, battery_type)?;
    let cathode = cathode_layer(params, battery_type)?;
    let anode = liquid_anode_layer(params, battery_type)?;
    Ok(IntermediateResults {
        cathode_density: cathode.density,
        number_of_layers: stack.number_of_layers,
        cell_height: stack.cell_height,
        total_surface_area: surface_area(params, stack.cell_height),
        cathode_void_volume: cathode.void_volume.unwrap_or(0.0),
        anode_void_volume: anode.and_then(|layer| layer.void_volume),
    })
}

/// Everything computed for one battery type.
#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
    pub breakdown: MassBreakdown,
    pub metrics: CellMetrics,
    pub composition: BTreeMap<Component, f64>,
    pub manufacturing: ManufacturingEnergy,
}

/// Run the full chain against a resolved type.
pub fn evaluate_params(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<CellReport> {
    let breakdown = pouch_cell(params, battery_type)?;
    let metrics = cell_metrics(&breakdown, params, battery_type)?;
    let composition = percentage_composition(&breakdown);
    let manufacturing = manufacturing_energy(params, battery_type, metrics.cell_capacity)?;
    Ok(CellReport {
        breakdown,
        metrics,
        composition,
        manufacturing,
    })
}

/// Resolve `battery_type` in `store` and run the full chain.
pub fn evaluate(store: &ParameterStore, battery_type: &str) -> CellResult<CellReport> {
    let bt = store.resolve(battery_type)?;
    evaluate_params(store.params(), &bt)
}

/// Manufacturing energy of one cell, with the capacity taken from the
/// cell's own mass balance.
pub fn manufacturing_energy_for(
    store: &ParameterStore,
    battery_type: &str,
) -> CellResult<ManufacturingEnergy> {
    let bt = store.resolve(battery_type)?;
    let params = store.params();
    let breakdown = pouch_cell(params, &bt)?;
    let metrics = cell_metrics(&breakdown, params, &bt)?;
    manufacturing_energy(params, &bt, metrics.cell_capacity)
}
