// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Parameter Store
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable parameter snapshots with deep-merge updates.
//!
//! The raw document is kept as a JSON tree so partial updates can be merged
//! structurally; every snapshot also carries the typed, validated view the
//! derivation stages read from.

use serde_json::{Map, Value};
use tracing::debug;

use crate::chemistry::BatteryType;
use crate::config::CellParameters;
use crate::error::CellResult;

/// Merge `updates` into `base`, returning a new tree.
///
/// Where both sides hold a mapping the merge recurses key by key; any other
/// combination replaces the old value wholesale.
pub fn deep_merge(base: &Value, updates: &Value) -> Value {
    match (base, updates) {
        (Value::Object(old), Value::Object(new)) => {
            let mut merged: Map<String, Value> = old.clone();
            for (key, value) in new {
                let next = match merged.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (_, replacement) => replacement.clone(),
    }
}

/// One validated parameter snapshot.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    document: Value,
    params: CellParameters,
}

impl ParameterStore {
    /// Build a store from an already materialized document.
    pub fn load(document: Value) -> CellResult<Self> {
        let params = CellParameters::from_value(&document)?;
        debug!(
            battery_types = ?params.battery_type.ids(),
            "parameter store loaded"
        );
        Ok(ParameterStore { document, params })
    }

    /// Parse a JSON document.
    pub fn from_json_str(contents: &str) -> CellResult<Self> {
        let document: Value = serde_json::from_str(contents)?;
        Self::load(document)
    }

    /// Load from a JSON file.
    pub fn from_file(path: &str) -> CellResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Produce a new snapshot with `updates` deep-merged in.
    /// `self` is left untouched, so earlier snapshots stay readable.
    pub fn update(&self, updates: &Value) -> CellResult<Self> {
        let merged = deep_merge(&self.document, updates);
        debug!("parameter store updated");
        Self::load(merged)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn params(&self) -> &CellParameters {
        &self.params
    }

    /// Resolve a battery-type identifier against this snapshot.
    pub fn resolve(&self, id: &str) -> CellResult<BatteryType> {
        self.params.resolve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CellError;
    use serde_json::json;

    #[test]
    fn test_merge_overrides_leaf() {
        let base = json!({ "densities": { "aluminum": 2.7, "copper": 8.96 } });
        let merged = deep_merge(&base, &json!({ "densities": { "aluminum": 3.0 } }));
        assert_eq!(merged["densities"]["aluminum"], json!(3.0));
        assert_eq!(merged["densities"]["copper"], json!(8.96));
    }

    #[test]
    fn test_merge_adds_new_keys() {
        let base = json!({ "a": { "b": 1 } });
        let merged = deep_merge(&base, &json!({ "a": { "c": 2 }, "d": 3 }));
        assert_eq!(merged, json!({ "a": { "b": 1, "c": 2 }, "d": 3 }));
    }

    #[test]
    fn test_merge_replaces_mapping_with_leaf() {
        let base = json!({ "a": { "b": 1 } });
        let merged = deep_merge(&base, &json!({ "a": 5 }));
        assert_eq!(merged, json!({ "a": 5 }));
    }

    #[test]
    fn test_merge_replaces_leaf_with_mapping() {
        let base = json!({ "a": 5 });
        let merged = deep_merge(&base, &json!({ "a": { "b": 1 } }));
        assert_eq!(merged, json!({ "a": { "b": 1 } }));
    }

    #[test]
    fn test_merge_leaves_base_untouched() {
        let base = json!({ "a": { "b": 1 } });
        let _ = deep_merge(&base, &json!({ "a": { "b": 2 } }));
        assert_eq!(base, json!({ "a": { "b": 1 } }));
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let err = ParameterStore::from_file("/nonexistent/pouch_cell_parameters.json").unwrap_err();
        assert!(matches!(err, CellError::Io(_)));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        let err = ParameterStore::from_json_str("{ \"battery_type\": ").unwrap_err();
        assert!(matches!(err, CellError::Json(_)));
    }

    #[test]
    fn test_load_requires_battery_type() {
        let err = ParameterStore::load(json!({ "dimensions": {} })).unwrap_err();
        assert!(err.to_string().contains("battery_type"));
    }
}
