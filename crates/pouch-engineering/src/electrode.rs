// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Single-Layer Electrodes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thickness, density and pore volume of one electrode coating face.
//!
//! Porous composite coatings (every cathode, liquid-electrolyte anodes) go
//! through [`porous_layer`]. Solid-state anodes are dense lithium foil whose
//! thickness is tabulated per type.

use pouch_types::chemistry::{BatteryType, Chemistry};
use pouch_types::config::{required, CellParameters};
use pouch_types::constants::{MG_PER_G, MM_PER_CM};
use pouch_types::error::CellResult;
use pouch_types::state::ElectrodeLayer;
use tracing::debug;

use crate::geometry::component_areas;

/// Inputs for one porous coating face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoatingRecipe {
    /// Coated area [cm²].
    pub area: f64,
    /// Active-material loading [mg/cm²].
    pub mass_loading: f64,
    pub ratio_active: f64,
    pub ratio_additive: f64,
    pub ratio_binder: f64,
    pub density_active: f64,
    pub density_additive: f64,
    pub density_binder: f64,
    pub porosity: f64,
}

/// Dry-material and processed volumes of a coating face [cm³].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoatingVolumes {
    pub mass: f64,
    pub material_volume: f64,
    pub processed_volume: f64,
}

/// Split the loading into components, convert each to volume and inflate by
/// porosity.
///
/// The loading is the active mass, so the total coating mass is
/// `active / ratio_active`; additive and binder follow from the total.
pub fn coating_volumes(recipe: &CoatingRecipe) -> CoatingVolumes {
    let mass_active = recipe.mass_loading * recipe.area / MG_PER_G;
    let mass = mass_active / recipe.ratio_active;
    let mass_additive = mass * recipe.ratio_additive;
    let mass_binder = mass * recipe.ratio_binder;

    let material_volume = mass_active / recipe.density_active
        + mass_additive / recipe.density_additive
        + mass_binder / recipe.density_binder;
    let processed_volume = material_volume / (1.0 - recipe.porosity);

    CoatingVolumes {
        mass,
        material_volume,
        processed_volume,
    }
}

/// Thickness [mm], density [g/cm³] and void volume [cm³] of one face.
pub fn porous_layer(recipe: &CoatingRecipe) -> ElectrodeLayer {
    let v = coating_volumes(recipe);
    ElectrodeLayer {
        thickness: v.processed_volume * MM_PER_CM / recipe.area,
        density: v.mass / v.processed_volume,
        void_volume: Some(v.processed_volume - v.material_volume),
    }
}

/// Cathode recipe: PVDF binder, cathode active material density per type.
pub fn cathode_recipe(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<CoatingRecipe> {
    let id = battery_type.id();
    let mp = &params.material_properties;
    let dens = &params.densities;
    Ok(CoatingRecipe {
        area: component_areas(params).cathode,
        mass_loading: mp
            .mass_loading
            .cathode
            .get("material_properties.mass_loading.cathode", id)?,
        ratio_active: mp.ratio_cathode_active_material,
        ratio_additive: mp.ratio_cathode_bc,
        ratio_binder: mp.ratio_cathode_pvdf,
        density_active: dens.cam.get("densities.cam", id)?,
        density_additive: dens.black_carbon,
        density_binder: dens.pvdf,
        porosity: mp.porosity_cathode,
    })
}

/// Liquid-electrolyte anode recipe: same ratios and porosity as the cathode,
/// CMC-SBR binder.
pub fn liquid_anode_recipe(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<CoatingRecipe> {
    let id = battery_type.id();
    let mp = &params.material_properties;
    let dens = &params.densities;
    Ok(CoatingRecipe {
        area: component_areas(params).anode,
        mass_loading: mp
            .mass_loading
            .anode
            .get("material_properties.mass_loading.anode", id)?,
        ratio_active: mp.ratio_cathode_active_material,
        ratio_additive: mp.ratio_cathode_bc,
        ratio_binder: mp.ratio_cathode_pvdf,
        density_active: dens.cam.get("densities.cam", id)?,
        density_additive: dens.black_carbon,
        density_binder: required(dens.cmc_sbr, "densities.CMC-SBR")?,
        porosity: mp.porosity_cathode,
    })
}

/// One cathode face, for either chemistry.
pub fn cathode_layer(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<ElectrodeLayer> {
    let layer = porous_layer(&cathode_recipe(params, battery_type)?);
    debug!(
        battery_type = battery_type.id(),
        thickness_mm = layer.thickness,
        density = layer.density,
        "cathode layer"
    );
    Ok(layer)
}

/// One coated anode face of a liquid-electrolyte cell.
///
/// Returns `None` (not applicable) for solid-state types.
pub fn liquid_anode_layer(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<Option<ElectrodeLayer>> {
    if !battery_type.chemistry().is_liquid_electrolyte() {
        return Ok(None);
    }
    let layer = porous_layer(&liquid_anode_recipe(params, battery_type)?);
    debug!(
        battery_type = battery_type.id(),
        thickness_mm = layer.thickness,
        density = layer.density,
        "anode layer"
    );
    Ok(Some(layer))
}

/// One anode face: tabulated lithium foil for solid-state, porous coating
/// for liquid-electrolyte.
pub fn anode_layer(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<ElectrodeLayer> {
    match battery_type.chemistry() {
        Chemistry::SolidState => Ok(ElectrodeLayer {
            thickness: params
                .thicknesses
                .anode
                .get("thicknesses.anode", battery_type.id())?,
            density: required(params.densities.lithium, "densities.lithium")?,
            void_volume: None,
        }),
        Chemistry::LiquidElectrolyte => {
            let recipe = liquid_anode_recipe(params, battery_type)?;
            Ok(porous_layer(&recipe))
        }
    }
}

/// Anode thickness of one face [mm].
pub fn anode_thickness(params: &CellParameters, battery_type: &BatteryType) -> CellResult<f64> {
    Ok(anode_layer(params, battery_type)?.thickness)
}

/// Anode density [g/cm³].
pub fn anode_density(params: &CellParameters, battery_type: &BatteryType) -> CellResult<f64> {
    Ok(anode_layer(params, battery_type)?.density)
}
