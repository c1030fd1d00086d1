// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Mass Balance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Absolute mass of every physical subcomponent of a pouch cell.
//!
//! Collectors and casing are sized identically for both chemistries. The
//! electrode, electrolyte and separator terms branch:
//!
//! - solid-state: single-sided electrodes, solid electrolyte layer per unit,
//!   one shared (bipolar) aluminium collector;
//! - liquid-electrolyte: double-sided electrodes, two separators per unit,
//!   copper anode collector, and liquid electrolyte filling every pore.

use std::fmt;

use pouch_types::chemistry::{BatteryType, Chemistry};
use pouch_types::config::{required, CellParameters};
use pouch_types::constants::MM_PER_CM;
use pouch_types::error::{CellError, CellResult};
use pouch_types::state::StackResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::electrode::{anode_layer, cathode_layer};
use crate::envelope::{surface_area, total_volume};
use crate::geometry::component_areas;
use crate::stacking::stack;

/// How an entry relates to the cell total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentRole {
    /// Top-level part; these sum to the total mass.
    Component,
    /// Share of a top-level electrode (active material, additive, binder).
    Constituent,
    /// Sublayer of the casing laminate.
    CasingLayer,
}

/// Named physical subcomponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Component {
    Cathode,
    CathodeActiveMaterial,
    CathodeConductiveAdditive,
    CathodeBinder,
    Anode,
    AnodeActiveMaterial,
    AnodeConductiveAdditive,
    AnodeBinder,
    CathodeCurrentCollector,
    AnodeCurrentCollector,
    Electrolyte,
    Separator,
    Casing,
    CasingAluminiumLayer,
    CasingPetLayer,
    CasingPolypropyleneLayer,
}

impl Component {
    /// Report label.
    pub fn label(self) -> &'static str {
        match self {
            Component::Cathode => "Cathode",
            Component::CathodeActiveMaterial => "Cathode active material",
            Component::CathodeConductiveAdditive => "Cathode conductive additive",
            Component::CathodeBinder => "Cathode Binder",
            Component::Anode => "Anode",
            Component::AnodeActiveMaterial => "Anode active material",
            Component::AnodeConductiveAdditive => "Anode conductive additive",
            Component::AnodeBinder => "Anode Binder",
            Component::CathodeCurrentCollector => "Cathode current collector",
            Component::AnodeCurrentCollector => "Anode current collector",
            Component::Electrolyte => "Electrolyte",
            Component::Separator => "Separator",
            Component::Casing => "Casing",
            Component::CasingAluminiumLayer => "Casing_al_layer",
            Component::CasingPetLayer => "Casing_al_pet",
            Component::CasingPolypropyleneLayer => "Casing_al_pp",
        }
    }

    pub fn role(self) -> ComponentRole {
        match self {
            Component::Cathode
            | Component::Anode
            | Component::CathodeCurrentCollector
            | Component::AnodeCurrentCollector
            | Component::Electrolyte
            | Component::Separator
            | Component::Casing => ComponentRole::Component,
            Component::CathodeActiveMaterial
            | Component::CathodeConductiveAdditive
            | Component::CathodeBinder
            | Component::AnodeActiveMaterial
            | Component::AnodeConductiveAdditive
            | Component::AnodeBinder => ComponentRole::Constituent,
            Component::CasingAluminiumLayer
            | Component::CasingPetLayer
            | Component::CasingPolypropyleneLayer => ComponentRole::CasingLayer,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentMass {
    pub component: Component,
    pub mass: f64, // g
}

/// Mass breakdown of one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassBreakdown {
    pub battery_type: String,
    pub chemistry: Chemistry,
    pub stack: StackResult,
    /// Outer envelope area used for the casing [cm²].
    pub total_surface_area: f64,
    /// Internal volume used for energy density [cm³].
    pub cell_volume: f64,
    /// Pore volume filled with liquid electrolyte [cm³].
    pub cell_void_volume: Option<f64>,
    pub entries: Vec<ComponentMass>,
    pub total_mass: f64, // g
}

impl MassBreakdown {
    pub fn get(&self, component: Component) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.component == component)
            .map(|e| e.mass)
    }

    /// Entries of one role, in report order.
    pub fn with_role(&self, role: ComponentRole) -> impl Iterator<Item = &ComponentMass> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.component.role() == role)
    }

    /// Sum of the top-level components; equals `total_mass`.
    pub fn itemized_mass(&self) -> f64 {
        self.with_role(ComponentRole::Component).map(|e| e.mass).sum()
    }
}

/// Electrode coating split by the composition ratios.
fn electrode_entries(
    params: &CellParameters,
    total: Component,
    parts: [Component; 3],
    mass: f64,
) -> [ComponentMass; 4] {
    let mp = &params.material_properties;
    [
        ComponentMass { component: total, mass },
        ComponentMass {
            component: parts[0],
            mass: mass * mp.ratio_cathode_active_material,
        },
        ComponentMass {
            component: parts[1],
            mass: mass * mp.ratio_cathode_bc,
        },
        ComponentMass {
            component: parts[2],
            mass: mass * mp.ratio_cathode_pvdf,
        },
    ]
}

/// Full mass breakdown of the pouch cell.
///
/// Fails with `DegenerateStack` when no repeating unit fits the envelope.
pub fn pouch_cell(
    params: &CellParameters,
    battery_type: &BatteryType,
) -> CellResult<MassBreakdown> {
    let id = battery_type.id();
    let stack = stack(params, battery_type)?;
    if stack.is_degenerate() {
        return Err(CellError::DegenerateStack {
            unit_thickness: stack.unit_thickness,
            available_height: stack.available_height,
        });
    }
    let n = f64::from(stack.number_of_layers);

    let areas = component_areas(params);
    let total_surface_area = surface_area(params, stack.cell_height);
    let cell_volume = total_volume(params, stack.cell_height);
    let cathode = cathode_layer(params, battery_type)?;
    let anode = anode_layer(params, battery_type)?;
    let t = &params.thicknesses;
    let d = &params.densities;

    let cathode_collector =
        areas.current_collector * t.aluminum_foil * d.aluminum / MM_PER_CM * n;
    let casing =
        total_surface_area * t.cell_container_thickness * d.cell_container_density / MM_PER_CM;
    let casing_al = total_surface_area * t.al_layer * d.aluminum / MM_PER_CM;
    let casing_pet = total_surface_area * t.pet_layer * d.pet / MM_PER_CM;
    let casing_pp = casing - casing_al - casing_pet;
    if casing_pp < 0.0 {
        return Err(CellError::PhysicsViolation(format!(
            "casing Al and PET layers ({:.6} g) outweigh the container ({casing:.6} g)",
            casing_al + casing_pet
        )));
    }

    let mut entries: Vec<ComponentMass> = Vec::with_capacity(16);
    let (total_mass, cell_void_volume) = match battery_type.chemistry() {
        Chemistry::LiquidElectrolyte => {
            // Both faces are coated.
            let cathode_mass =
                areas.cathode * cathode.thickness * 2.0 * cathode.density / MM_PER_CM * n;
            let anode_mass = areas.anode * anode.thickness * anode.density * 2.0 / MM_PER_CM * n;

            // Separator shares the collector footprint; two per unit.
            let separator_thickness = t.separator.get("thicknesses.separator", id)?;
            let separator_volume =
                2.0 * areas.current_collector * separator_thickness / MM_PER_CM * n;
            let separator_porosity = required(
                params.material_properties.porosity_separator,
                "material_properties.porosity_separator",
            )?;
            let separator_void = separator_volume * separator_porosity;
            let cathode_void = 2.0 * cathode.void_volume.unwrap_or(0.0) * n;
            let anode_void = 2.0 * anode.void_volume.unwrap_or(0.0) * n;
            let void_volume = separator_void + cathode_void + anode_void;

            let electrolyte = void_volume * d.electrolyte.get("densities.electrolyte", id)?;
            let separator = separator_volume * required(d.pp, "densities.PP")?;
            let anode_collector = areas.current_collector
                * required(t.copper_foil, "thicknesses.copper_foil")?
                * required(d.copper, "densities.copper")?
                / MM_PER_CM
                * n;

            entries.extend(electrode_entries(
                params,
                Component::Cathode,
                [
                    Component::CathodeActiveMaterial,
                    Component::CathodeConductiveAdditive,
                    Component::CathodeBinder,
                ],
                cathode_mass,
            ));
            entries.extend(electrode_entries(
                params,
                Component::Anode,
                [
                    Component::AnodeActiveMaterial,
                    Component::AnodeConductiveAdditive,
                    Component::AnodeBinder,
                ],
                anode_mass,
            ));
            entries.extend([
                ComponentMass {
                    component: Component::CathodeCurrentCollector,
                    mass: cathode_collector,
                },
                ComponentMass {
                    component: Component::AnodeCurrentCollector,
                    mass: anode_collector,
                },
                ComponentMass {
                    component: Component::Electrolyte,
                    mass: electrolyte,
                },
                ComponentMass {
                    component: Component::Separator,
                    mass: separator,
                },
            ]);

            let total = anode_mass
                + anode_collector
                + cathode_collector
                + cathode_mass
                + electrolyte
                + separator
                + casing;
            (total, Some(void_volume))
        }
        Chemistry::SolidState => {
            let cathode_mass = areas.cathode * cathode.thickness * cathode.density / MM_PER_CM * n;
            let anode_mass = areas.anode * anode.thickness * anode.density / MM_PER_CM * n;
            let electrolyte = areas.electrolyte
                * t.electrolyte.get("thicknesses.electrolyte", id)?
                * d.electrolyte.get("densities.electrolyte", id)?
                / MM_PER_CM
                * n;

            entries.extend(electrode_entries(
                params,
                Component::Cathode,
                [
                    Component::CathodeActiveMaterial,
                    Component::CathodeConductiveAdditive,
                    Component::CathodeBinder,
                ],
                cathode_mass,
            ));
            // Lithium foil is all active material.
            entries.extend([
                ComponentMass {
                    component: Component::Anode,
                    mass: anode_mass,
                },
                ComponentMass {
                    component: Component::AnodeActiveMaterial,
                    mass: anode_mass,
                },
                ComponentMass {
                    component: Component::CathodeCurrentCollector,
                    mass: cathode_collector,
                },
                ComponentMass {
                    component: Component::Electrolyte,
                    mass: electrolyte,
                },
            ]);

            let total = anode_mass + cathode_collector + cathode_mass + electrolyte + casing;
            (total, None)
        }
    };

    entries.extend([
        ComponentMass {
            component: Component::Casing,
            mass: casing,
        },
        ComponentMass {
            component: Component::CasingAluminiumLayer,
            mass: casing_al,
        },
        ComponentMass {
            component: Component::CasingPetLayer,
            mass: casing_pet,
        },
        ComponentMass {
            component: Component::CasingPolypropyleneLayer,
            mass: casing_pp,
        },
    ]);

    debug!(
        battery_type = id,
        layers = stack.number_of_layers,
        total_mass_g = total_mass,
        "pouch cell mass balance"
    );

    Ok(MassBreakdown {
        battery_type: id.to_string(),
        chemistry: battery_type.chemistry(),
        stack,
        total_surface_area,
        cell_volume,
        cell_void_volume,
        entries,
        total_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{reference_params, reference_store, ASSB, LIB};
    use serde_json::json;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_solid_state_breakdown() {
        let params = reference_params();
        let bt = params.resolve(ASSB).unwrap();
        let b = pouch_cell(&params, &bt).unwrap();
        let expected = [
            (Component::Cathode, 150.0),
            (Component::CathodeActiveMaterial, 144.0),
            (Component::CathodeConductiveAdditive, 3.0),
            (Component::CathodeBinder, 3.0),
            (Component::Anode, 8.000_259_84),
            (Component::CathodeCurrentCollector, 23.328),
            (Component::Electrolyte, 46.725_12),
            (Component::Casing, 7.399_225_6),
            (Component::CasingAluminiumLayer, 3.329_651_52),
            (Component::CasingPetLayer, 0.510_546_566_4),
            (Component::CasingPolypropyleneLayer, 3.559_027_513_6),
        ];
        for (component, mass) in expected {
            let got = b.get(component).unwrap();
            assert!(close(got, mass), "{component}: expected {mass}, got {got}");
        }
        assert!(close(b.total_mass, 235.452_605_44));
        assert!(b.get(Component::Separator).is_none());
        assert!(b.get(Component::AnodeCurrentCollector).is_none());
        assert!(b.cell_void_volume.is_none());
    }

    #[test]
    fn test_liquid_breakdown() {
        let params = reference_params();
        let bt = params.resolve(LIB).unwrap();
        let b = pouch_cell(&params, &bt).unwrap();
        let expected = [
            (Component::Cathode, 145.833_333_333_333_34),
            (Component::CathodeActiveMaterial, 140.0),
            (Component::Anode, 75.862_5),
            (Component::AnodeActiveMaterial, 72.828),
            (Component::AnodeConductiveAdditive, 1.517_25),
            (Component::AnodeBinder, 1.517_25),
            (Component::CathodeCurrentCollector, 11.34),
            (Component::AnodeCurrentCollector, 25.088),
            (Component::Electrolyte, 34.269_396_969_696_97),
            (Component::Separator, 12.6),
            (Component::Casing, 7.401_415_757_575_757),
        ];
        for (component, mass) in expected {
            let got = b.get(component).unwrap();
            assert!(close(got, mass), "{component}: expected {mass}, got {got}");
        }
        assert!(close(b.total_mass, 312.394_646_060_606_1));
        assert!(b.cell_void_volume.unwrap() > 0.0);
    }

    #[test]
    fn test_cell_volume_reported_for_both_chemistries() {
        let params = reference_params();
        let solid = pouch_cell(&params, &params.resolve(ASSB).unwrap()).unwrap();
        let liquid = pouch_cell(&params, &params.resolve(LIB).unwrap()).unwrap();
        assert!(close(solid.cell_volume, 104.767_111_026_666_65));
        assert!(close(liquid.cell_volume, 104.982_922_686_868_66));
    }

    #[test]
    fn test_itemized_mass_matches_total() {
        let params = reference_params();
        for id in [ASSB, LIB] {
            let b = pouch_cell(&params, &params.resolve(id).unwrap()).unwrap();
            assert!(close(b.itemized_mass(), b.total_mass), "{id}");
        }
    }

    #[test]
    fn test_casing_layers_sum_to_casing() {
        let params = reference_params();
        let b = pouch_cell(&params, &params.resolve(ASSB).unwrap()).unwrap();
        let layers: f64 = b.with_role(ComponentRole::CasingLayer).map(|e| e.mass).sum();
        assert!(close(layers, b.get(Component::Casing).unwrap()));
    }

    #[test]
    fn test_degenerate_stack_rejected() {
        let mut params = reference_params();
        params.dimensions.cell_height_benchmark = 0.35;
        let bt = params.resolve(LIB).unwrap();
        assert!(matches!(
            pouch_cell(&params, &bt),
            Err(CellError::DegenerateStack { .. })
        ));
    }

    #[test]
    fn test_light_container_rejected() {
        // 0.15 mm at 0.5 g/cm³ is lighter than the 0.04 mm Al + 0.012 mm PET laminate.
        let store = reference_store()
            .update(&json!({ "densities": { "cell_container_density": 0.5 } }))
            .unwrap();
        for id in [ASSB, LIB] {
            let bt = store.resolve(id).unwrap();
            match pouch_cell(store.params(), &bt) {
                Err(CellError::PhysicsViolation(msg)) => assert!(msg.contains("casing")),
                other => panic!("{id}: expected PhysicsViolation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_separator_density_rejected_on_update() {
        let err = reference_store()
            .update(&json!({ "densities": { "PP": -0.9 } }))
            .unwrap_err();
        assert!(matches!(err, CellError::PhysicsViolation(_)));
    }

    #[test]
    fn test_labels_follow_report_convention() {
        assert_eq!(Component::CathodeActiveMaterial.label(), "Cathode active material");
        assert!(Component::CasingPetLayer.label().contains('_'));
        assert!(!Component::AnodeCurrentCollector.label().contains('_'));
    }
}
