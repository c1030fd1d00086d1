// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chemistry::{BatteryType, Chemistry};
use crate::error::{CellError, CellResult};

/// Sections every parameter document must carry.
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "battery_type",
    "dimensions",
    "material_properties",
    "densities",
    "thicknesses",
    "battery_manufacturing_energy",
];

/// Top-level cell parameters.
/// Field names follow the configuration document keys one-to-one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellParameters {
    pub battery_type: BatteryTypeRegistry,
    pub dimensions: Dimensions,
    pub material_properties: MaterialProperties,
    pub densities: Densities,
    pub thicknesses: Thicknesses,
    pub battery_manufacturing_energy: ManufacturingCoefficients,
}

/// Per-type lookup table, keyed by battery-type identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable(BTreeMap<String, f64>);

impl TypeTable {
    /// Look up `battery_type`; `table` is the dotted path used in the error.
    pub fn get(&self, table: &str, battery_type: &str) -> CellResult<f64> {
        self.0
            .get(battery_type)
            .copied()
            .ok_or_else(|| CellError::MissingTypeEntry {
                table: table.to_string(),
                battery_type: battery_type.to_string(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject any zero, negative or non-finite entry.
    pub fn ensure_positive(&self, table: &str) -> CellResult<()> {
        for (battery_type, &value) in &self.0 {
            ensure_positive(&format!("{table}.{battery_type}"), value)?;
        }
        Ok(())
    }
}

impl<const N: usize> From<[(&str, f64); N]> for TypeTable {
    fn from(entries: [(&str, f64); N]) -> Self {
        TypeTable(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

/// Registry of supported battery types.
///
/// Accepts either a plain list of identifiers or a mapping keyed by
/// identifier (values are free-form descriptions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatteryTypeRegistry {
    List(Vec<String>),
    Described(BTreeMap<String, Value>),
}

impl BatteryTypeRegistry {
    pub fn contains(&self, id: &str) -> bool {
        match self {
            BatteryTypeRegistry::List(ids) => ids.iter().any(|t| t == id),
            BatteryTypeRegistry::Described(map) => map.contains_key(id),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        match self {
            BatteryTypeRegistry::List(ids) => ids.iter().map(String::as_str).collect(),
            BatteryTypeRegistry::Described(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// Planar footprint of one component [mm].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub cathode: Footprint,
    pub anode: Footprint,
    pub electrolyte: Footprint,
    pub current_collector: Footprint,
    pub total_cell: Footprint,
    /// Target envelope height [mm].
    pub cell_height_benchmark: f64,
}

/// Single-face areal mass loading [mg/cm²].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassLoading {
    pub cathode: TypeTable,
    /// Only liquid-electrolyte types carry a coated anode.
    #[serde(default)]
    pub anode: TypeTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub mass_loading: MassLoading,
    pub ratio_cathode_active_material: f64,
    /// Conductive additive (carbon black) mass ratio.
    pub ratio_cathode_bc: f64,
    /// Binder mass ratio.
    pub ratio_cathode_pvdf: f64,
    pub porosity_cathode: f64,
    #[serde(default)]
    pub porosity_separator: Option<f64>,
    /// Specific capacity of the cathode active material [mAh/g].
    pub capacity_material: TypeTable,
    /// Nominal voltage [V].
    pub voltage: TypeTable,
}

/// Mass densities [g/cm³].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Densities {
    /// Active material per type.
    pub cam: TypeTable,
    pub black_carbon: f64,
    #[serde(rename = "PVDF")]
    pub pvdf: f64,
    #[serde(rename = "CMC-SBR", default)]
    pub cmc_sbr: Option<f64>,
    #[serde(default)]
    pub lithium: Option<f64>,
    pub aluminum: f64,
    #[serde(default)]
    pub copper: Option<f64>,
    #[serde(rename = "PP", default)]
    pub pp: Option<f64>,
    #[serde(rename = "PET")]
    pub pet: f64,
    pub electrolyte: TypeTable,
    pub cell_container_density: f64,
}

/// Layer thicknesses [mm].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thicknesses {
    /// Lithium-metal anode per solid-state type.
    #[serde(default)]
    pub anode: TypeTable,
    pub aluminum_foil: f64,
    #[serde(default)]
    pub copper_foil: Option<f64>,
    #[serde(default)]
    pub separator: TypeTable,
    #[serde(default)]
    pub electrolyte: TypeTable,
    pub cell_container_thickness: f64,
    #[serde(rename = "Al_layer")]
    pub al_layer: f64,
    #[serde(rename = "PET_layer")]
    pub pet_layer: f64,
}

/// Electricity and gas demand of one process [kWh per kWh of cell capacity].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessCoefficients {
    pub electric_energy_consumption: TypeTable,
    pub gas_consumption: TypeTable,
}

impl ProcessCoefficients {
    /// Electricity and gas coefficients of `battery_type` for the process
    /// stored under `key`.
    pub fn lookup(&self, key: &str, battery_type: &str) -> CellResult<(f64, f64)> {
        let electricity = self.electric_energy_consumption.get(
            &format!("battery_manufacturing_energy.{key}.electric_energy_consumption"),
            battery_type,
        )?;
        let gas = self.gas_consumption.get(
            &format!("battery_manufacturing_energy.{key}.gas_consumption"),
            battery_type,
        )?;
        Ok((electricity, gas))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturingCoefficients {
    pub electrode_manufacturing_anode: ProcessCoefficients,
    pub electrolyte_manufacturing: ProcessCoefficients,
    pub electrode_manufacturing_cathode: ProcessCoefficients,
    pub assembly: ProcessCoefficients,
    pub formation_and_aging: ProcessCoefficients,
    pub miscellaneous: ProcessCoefficients,
}

impl ManufacturingCoefficients {
    /// Processes in reporting order, with their configuration keys.
    /// This is the only place the keys are spelled out.
    pub fn processes(&self) -> [(&'static str, &ProcessCoefficients); 6] {
        [
            (
                "electrode_manufacturing_anode",
                &self.electrode_manufacturing_anode,
            ),
            ("electrolyte_manufacturing", &self.electrolyte_manufacturing),
            (
                "electrode_manufacturing_cathode",
                &self.electrode_manufacturing_cathode,
            ),
            ("assembly", &self.assembly),
            ("formation_and_aging", &self.formation_and_aging),
            ("miscellaneous", &self.miscellaneous),
        ]
    }
}

/// Unwrap a chemistry-specific scalar, naming its path on absence.
pub fn required(value: Option<f64>, path: &str) -> CellResult<f64> {
    value.ok_or_else(|| CellError::ConfigError(format!("missing required value {path}")))
}

/// Reject zero, negative or non-finite physical quantities.
pub fn ensure_positive(path: &str, value: f64) -> CellResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CellError::PhysicsViolation(format!("{path} must be positive, got {value}")))
    }
}

impl CellParameters {
    /// Build typed parameters from a materialized document.
    ///
    /// Fails with `MissingSection` before attempting deserialization so the
    /// absent section is named precisely.
    pub fn from_value(doc: &Value) -> CellResult<Self> {
        let root = doc
            .as_object()
            .ok_or_else(|| CellError::ConfigError("parameter document must be a mapping".into()))?;
        for section in REQUIRED_SECTIONS {
            if !root.contains_key(section) {
                return Err(CellError::MissingSection(section.to_string()));
            }
        }
        let params: Self = serde_json::from_value(doc.clone())?;
        params.validate()?;
        Ok(params)
    }

    /// Chemistry-independent sanity checks.
    pub fn validate(&self) -> CellResult<()> {
        let mp = &self.material_properties;
        if !(0.0..1.0).contains(&mp.porosity_cathode) {
            return Err(CellError::PhysicsViolation(format!(
                "material_properties.porosity_cathode must lie in [0, 1), got {}",
                mp.porosity_cathode
            )));
        }
        ensure_positive(
            "material_properties.ratio_cathode_active_material",
            mp.ratio_cathode_active_material,
        )?;
        ensure_positive("material_properties.ratio_cathode_bc", mp.ratio_cathode_bc)?;
        ensure_positive("material_properties.ratio_cathode_pvdf", mp.ratio_cathode_pvdf)?;
        mp.mass_loading
            .cathode
            .ensure_positive("material_properties.mass_loading.cathode")?;
        mp.mass_loading
            .anode
            .ensure_positive("material_properties.mass_loading.anode")?;

        let dens = &self.densities;
        dens.cam.ensure_positive("densities.cam")?;
        dens.electrolyte.ensure_positive("densities.electrolyte")?;
        for (path, value) in [
            ("densities.black_carbon", Some(dens.black_carbon)),
            ("densities.PVDF", Some(dens.pvdf)),
            ("densities.CMC-SBR", dens.cmc_sbr),
            ("densities.lithium", dens.lithium),
            ("densities.aluminum", Some(dens.aluminum)),
            ("densities.copper", dens.copper),
            ("densities.PP", dens.pp),
            ("densities.PET", Some(dens.pet)),
            ("densities.cell_container_density", Some(dens.cell_container_density)),
        ] {
            if let Some(value) = value {
                ensure_positive(path, value)?;
            }
        }

        let th = &self.thicknesses;
        th.anode.ensure_positive("thicknesses.anode")?;
        th.separator.ensure_positive("thicknesses.separator")?;
        th.electrolyte.ensure_positive("thicknesses.electrolyte")?;
        for (path, value) in [
            ("thicknesses.aluminum_foil", Some(th.aluminum_foil)),
            ("thicknesses.copper_foil", th.copper_foil),
            ("thicknesses.cell_container_thickness", Some(th.cell_container_thickness)),
            ("thicknesses.Al_layer", Some(th.al_layer)),
            ("thicknesses.PET_layer", Some(th.pet_layer)),
        ] {
            if let Some(value) = value {
                ensure_positive(path, value)?;
            }
        }

        let d = &self.dimensions;
        for (name, fp) in [
            ("cathode", d.cathode),
            ("anode", d.anode),
            ("electrolyte", d.electrolyte),
            ("current_collector", d.current_collector),
            ("total_cell", d.total_cell),
        ] {
            if fp.width <= 0.0 || fp.length <= 0.0 {
                return Err(CellError::PhysicsViolation(format!(
                    "dimensions.{name} footprint must be positive, got {} x {}",
                    fp.width, fp.length
                )));
            }
        }
        Ok(())
    }

    /// Resolve a battery-type identifier and eagerly check every per-type
    /// entry its chemistry needs.
    pub fn resolve(&self, id: &str) -> CellResult<BatteryType> {
        if !self.battery_type.contains(id) {
            return Err(CellError::UnknownBatteryType(id.to_string()));
        }
        let chemistry = Chemistry::from_identifier(id)?;

        let mp = &self.material_properties;
        let mut tables: Vec<(&str, &TypeTable)> = vec![
            (
                "material_properties.mass_loading.cathode",
                &mp.mass_loading.cathode,
            ),
            ("material_properties.capacity_material", &mp.capacity_material),
            ("material_properties.voltage", &mp.voltage),
            ("densities.cam", &self.densities.cam),
            ("densities.electrolyte", &self.densities.electrolyte),
        ];
        for (key, process) in self.battery_manufacturing_energy.processes() {
            process.lookup(key, id)?;
        }

        match chemistry {
            Chemistry::SolidState => {
                tables.push(("thicknesses.anode", &self.thicknesses.anode));
                tables.push(("thicknesses.electrolyte", &self.thicknesses.electrolyte));
                required(self.densities.lithium, "densities.lithium")?;
            }
            Chemistry::LiquidElectrolyte => {
                tables.push((
                    "material_properties.mass_loading.anode",
                    &mp.mass_loading.anode,
                ));
                tables.push(("thicknesses.separator", &self.thicknesses.separator));
                required(self.densities.cmc_sbr, "densities.CMC-SBR")?;
                required(self.densities.copper, "densities.copper")?;
                required(self.densities.pp, "densities.PP")?;
                required(self.thicknesses.copper_foil, "thicknesses.copper_foil")?;
                let porosity =
                    required(mp.porosity_separator, "material_properties.porosity_separator")?;
                if !(0.0..=1.0).contains(&porosity) {
                    return Err(CellError::PhysicsViolation(format!(
                        "material_properties.porosity_separator must lie in [0, 1], got {porosity}"
                    )));
                }
            }
        }

        for (path, table) in tables {
            table.get(path, id)?;
        }
        Ok(BatteryType::new(id, chemistry))
    }
}
