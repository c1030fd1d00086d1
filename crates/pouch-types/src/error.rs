// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing configuration section: {0}")]
    MissingSection(String),

    #[error("Missing entry for battery type '{battery_type}' in {table}")]
    MissingTypeEntry { table: String, battery_type: String },

    #[error("Battery type '{0}' is not listed in the battery_type registry")]
    UnknownBatteryType(String),

    #[error("Cannot infer chemistry from battery type '{0}': expected exactly one of ASSB or LIB")]
    AmbiguousChemistry(String),

    #[error(
        "Degenerate stack: unit thickness {unit_thickness} mm exceeds available height {available_height} mm"
    )]
    DegenerateStack {
        unit_thickness: f64,
        available_height: f64,
    },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CellResult<T> = Result<T, CellError>;
