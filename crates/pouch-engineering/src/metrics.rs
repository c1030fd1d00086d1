// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Cell Metrics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Capacity, specific energy, energy density and mass composition.

use std::collections::BTreeMap;

use pouch_types::chemistry::BatteryType;
use pouch_types::config::CellParameters;
use pouch_types::constants::{CM3_TO_L, G_TO_KG, MAH_V_TO_WH};
use pouch_types::error::{CellError, CellResult};
use pouch_types::state::CellMetrics;
use tracing::debug;

use crate::mass_balance::{Component, ComponentRole, MassBreakdown};

/// Capacity [Wh] from the cathode active mass.
///
/// `C = m_cam * q * V * 0.001`.
pub fn cell_capacity(cam_mass: f64, specific_capacity: f64, voltage: f64) -> f64 {
    cam_mass * specific_capacity * voltage * MAH_V_TO_WH
}

pub fn cell_metrics(
    breakdown: &MassBreakdown,
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<CellMetrics> {
    let id = battery_type.id();
    let mp = &params.material_properties;
    let cam_mass = breakdown
        .get(Component::CathodeActiveMaterial)
        .ok_or_else(|| {
            CellError::ConfigError(format!(
                "mass breakdown for {} has no cathode active material",
                breakdown.battery_type
            ))
        })?;

    let capacity = cell_capacity(
        cam_mass,
        mp.capacity_material.get("material_properties.capacity_material", id)?,
        mp.voltage.get("material_properties.voltage", id)?,
    );
    let metrics = CellMetrics {
        total_mass: breakdown.total_mass,
        cell_capacity: capacity,
        specific_energy: capacity / (breakdown.total_mass * G_TO_KG),
        energy_density: capacity / (breakdown.cell_volume * CM3_TO_L),
        cell_volume: breakdown.cell_volume,
    };
    debug!(
        battery_type = id,
        capacity_wh = metrics.cell_capacity,
        specific_energy_wh_kg = metrics.specific_energy,
        energy_density_wh_l = metrics.energy_density,
        "cell metrics"
    );
    Ok(metrics)
}

/// Share of the total mass [%] of each top-level component.
///
/// Electrode constituents and casing sublayers are already counted inside
/// their parent and are left out, so the shares add up to 100.
pub fn percentage_composition(breakdown: &MassBreakdown) -> BTreeMap<Component, f64> {
    breakdown
        .with_role(ComponentRole::Component)
        .map(|e| (e.component, 100.0 * e.mass / breakdown.total_mass))
        .collect()
}
