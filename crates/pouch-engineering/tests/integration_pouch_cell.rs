// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Integration Tests for pouch-engineering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end checks through the parameter store.

use pouch_engineering::electrode::{cathode_layer, liquid_anode_layer};
use pouch_engineering::geometry::component_areas;
use pouch_engineering::mass_balance::{pouch_cell, Component};
use pouch_engineering::report::{calculate_all, evaluate};
use pouch_types::error::CellError;
use pouch_types::store::ParameterStore;
use serde_json::json;

const REFERENCE_CELL: &str = include_str!("data/reference_cell.json");

fn reference_store() -> ParameterStore {
    ParameterStore::from_json_str(REFERENCE_CELL).unwrap()
}

#[test]
fn test_ten_cm2_cathode_through_store() {
    // 50 mm x 20 mm = 10 cm²; 20 mg/cm²; 4.5 / 1.8 / 1.2 g/cm³; porosity 0.3.
    let store = reference_store()
        .update(&json!({
            "dimensions": { "cathode": { "width": 50.0, "length": 20.0 } },
            "densities": { "PVDF": 1.2, "black_carbon": 1.8 }
        }))
        .unwrap();
    let bt = store.resolve("ASSB-NMC811").unwrap();
    let params = store.params();
    assert!((component_areas(params).cathode - 10.0).abs() < 1e-12);

    let layer = cathode_layer(params, &bt).unwrap();
    // processed volume 0.0717593 cm³ over 10 cm² -> 0.07176 mm
    let rounded = (layer.thickness * 1.0e5).round() / 1.0e5;
    assert!(
        (rounded - 0.07176).abs() < 1e-12,
        "thickness {} should round to 0.07176 mm",
        layer.thickness
    );
}

#[test]
fn test_store_loads_from_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/reference_cell.json");
    let from_file = ParameterStore::from_file(path).unwrap();
    assert_eq!(from_file.document(), reference_store().document());
    let report = evaluate(&from_file, "LIB-NMC811").unwrap();
    assert!((report.breakdown.total_mass - 312.394_646_060_606_1).abs() < 1e-9);
}

#[test]
fn test_update_changes_only_aluminum_density() {
    let before = reference_store();
    let after = before
        .update(&json!({ "densities": { "aluminum": 3.0 } }))
        .unwrap();

    assert!((after.params().densities.aluminum - 3.0).abs() < 1e-12);
    assert!((before.params().densities.aluminum - 2.7).abs() < 1e-12);

    let mut expected = before.document().clone();
    expected["densities"]["aluminum"] = json!(3.0);
    assert_eq!(after.document(), &expected);
}

#[test]
fn test_update_propagates_into_casing_mass() {
    let before = reference_store();
    let after = before
        .update(&json!({ "densities": { "aluminum": 3.0 } }))
        .unwrap();
    let bt = before.resolve("ASSB-NMC811").unwrap();
    let old = pouch_cell(before.params(), &bt).unwrap();
    let new = pouch_cell(after.params(), &bt).unwrap();
    assert!(
        new.get(Component::CasingAluminiumLayer).unwrap()
            > old.get(Component::CasingAluminiumLayer).unwrap()
    );
    assert_eq!(
        new.get(Component::Electrolyte),
        old.get(Component::Electrolyte)
    );
}

#[test]
fn test_liquid_formula_not_applicable_for_solid_state() {
    let store = reference_store();
    let bt = store.resolve("ASSB-NMC811").unwrap();
    assert_eq!(liquid_anode_layer(store.params(), &bt).unwrap(), None);
    let all = calculate_all(store.params(), &bt).unwrap();
    assert!(all.anode_void_volume.is_none());
}

#[test]
fn test_both_chemistries_report_cell_volume() {
    let store = reference_store();
    for id in ["ASSB-NMC811", "LIB-NMC811"] {
        let report = evaluate(&store, id).unwrap();
        assert!(report.breakdown.cell_volume > 0.0, "{id}");
        assert_eq!(report.metrics.cell_volume, report.breakdown.cell_volume);
    }
}

#[test]
fn test_missing_battery_type_section() {
    let mut doc: serde_json::Value = serde_json::from_str(REFERENCE_CELL).unwrap();
    doc.as_object_mut().unwrap().remove("battery_type");
    assert!(matches!(
        ParameterStore::load(doc),
        Err(CellError::MissingSection(_))
    ));
}

#[test]
fn test_missing_per_type_entry_fails_at_resolution() {
    let mut doc: serde_json::Value = serde_json::from_str(REFERENCE_CELL).unwrap();
    doc["thicknesses"]["separator"] = json!({});
    let store = ParameterStore::load(doc).unwrap();
    match store.resolve("LIB-NMC811") {
        Err(CellError::MissingTypeEntry { table, .. }) => {
            assert_eq!(table, "thicknesses.separator")
        }
        other => panic!("expected MissingTypeEntry, got {other:?}"),
    }
    assert!(store.resolve("ASSB-NMC811").is_ok());
}

#[test]
fn test_degenerate_envelope_is_reported() {
    let store = reference_store()
        .update(&json!({ "dimensions": { "cell_height_benchmark": 0.35 } }))
        .unwrap();
    let err = evaluate(&store, "ASSB-NMC811").unwrap_err();
    assert!(matches!(err, CellError::DegenerateStack { .. }));
}

#[test]
fn test_report_serializes_to_json() {
    let store = reference_store();
    let report = evaluate(&store, "LIB-NMC811").unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert!(value["composition"]["Cathode"].is_number());
    assert!(value["manufacturing"]["per_cell_total"].is_number());
}
