// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Pouch Engineering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dimensioning and mass-balance stages.
//!
//! Data flows geometry → electrode → stacking → envelope → mass balance →
//! metrics; manufacturing energy depends only on the resulting capacity.

pub mod electrode;
pub mod envelope;
pub mod geometry;
pub mod manufacturing;
pub mod mass_balance;
pub mod metrics;
pub mod report;
pub mod stacking;
