// ─────────────────────────────────────────────────────────────────────
// Pouch Cell Model — Manufacturing Energy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-cell manufacturing energy scaled by cell capacity.
//!
//! Coefficients are kWh of utility per kWh of cell capacity, per process and
//! battery type. The formula does not branch on chemistry.

use std::fmt;

use pouch_types::chemistry::BatteryType;
use pouch_types::config::CellParameters;
use pouch_types::constants::WH_PER_KWH;
use pouch_types::error::CellResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Manufacturing process step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Process {
    AnodeElectrode,
    Electrolyte,
    CathodeElectrode,
    Assembly,
    FormationAging,
    Miscellaneous,
}

impl Process {
    /// Reporting order; matches `ManufacturingCoefficients::processes`.
    pub const ALL: [Process; 6] = [
        Process::AnodeElectrode,
        Process::Electrolyte,
        Process::CathodeElectrode,
        Process::Assembly,
        Process::FormationAging,
        Process::Miscellaneous,
    ];

    /// Report label prefix.
    pub fn label(self) -> &'static str {
        match self {
            Process::AnodeElectrode => "Anode",
            Process::Electrolyte => "Electrolyte",
            Process::CathodeElectrode => "Cathode",
            Process::Assembly => "Assembly",
            Process::FormationAging => "Formation_Aging",
            Process::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Energy of one process for one cell [kWh].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessEnergy {
    pub process: Process,
    pub electricity: f64,
    pub gas: f64,
    pub total: f64,
}

/// Manufacturing energy of one cell [kWh].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingEnergy {
    pub processes: Vec<ProcessEnergy>,
    pub per_cell_total: f64,
}

impl ManufacturingEnergy {
    pub fn process(&self, process: Process) -> Option<&ProcessEnergy> {
        self.processes.iter().find(|p| p.process == process)
    }

    pub fn electricity(&self) -> f64 {
        self.processes.iter().map(|p| p.electricity).sum()
    }

    pub fn gas(&self) -> f64 {
        self.processes.iter().map(|p| p.gas).sum()
    }
}

/// Scale every process coefficient by the cell capacity given in Wh.
pub fn manufacturing_energy(
    params: &CellParameters,
    battery_type: &BatteryType,
    cell_capacity_wh: f64,
) -> CellResult<ManufacturingEnergy> {
    let id = battery_type.id();
    let capacity_kwh = cell_capacity_wh / WH_PER_KWH;

    let mut processes = Vec::with_capacity(Process::ALL.len());
    let coefficients = params.battery_manufacturing_energy.processes();
    for (process, (key, c)) in Process::ALL.into_iter().zip(coefficients) {
        let (electricity, gas) = c.lookup(key, id)?;
        let electricity = electricity * capacity_kwh;
        let gas = gas * capacity_kwh;
        processes.push(ProcessEnergy {
            process,
            electricity,
            gas,
            total: electricity + gas,
        });
    }
    let per_cell_total = processes.iter().map(|p| p.total).sum();

    debug!(
        battery_type = id,
        capacity_kwh,
        per_cell_kwh = per_cell_total,
        "manufacturing energy"
    );
    Ok(ManufacturingEnergy {
        processes,
        per_cell_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pouch_types::config::{ProcessCoefficients, TypeTable};
    use crate::fixtures::{reference_params, ASSB, LIB};

    #[test]
    fn test_solid_state_manufacturing_energy() {
        let params = reference_params();
        let bt = params.resolve(ASSB).unwrap();
        let e = manufacturing_energy(&params, &bt, 106.56).unwrap();
        let cathode = e.process(Process::CathodeElectrode).unwrap();
        assert!((cathode.electricity - 1.0656).abs() < 1e-12);
        assert!((cathode.gas - 0.319_68).abs() < 1e-12);
        assert!((cathode.total - 1.385_28).abs() < 1e-12);
        assert!((e.per_cell_total - 4.2624).abs() < 1e-12);
    }

    #[test]
    fn test_liquid_manufacturing_energy() {
        let params = reference_params();
        let bt = params.resolve(LIB).unwrap();
        let e = manufacturing_energy(&params, &bt, 103.6).unwrap();
        assert_eq!(e.processes.len(), 6);
        let anode = e.process(Process::AnodeElectrode).unwrap();
        assert!((anode.total - 1.3468).abs() < 1e-12);
        assert!((e.per_cell_total - 5.2318).abs() < 1e-12);
        assert!((e.electricity() + e.gas() - e.per_cell_total).abs() < 1e-12);
    }

    #[test]
    fn test_zero_capacity_gives_zero_energy() {
        let params = reference_params();
        let bt = params.resolve(LIB).unwrap();
        let e = manufacturing_energy(&params, &bt, 0.0).unwrap();
        assert_eq!(e.per_cell_total, 0.0);
    }

    #[test]
    fn test_each_process_reads_its_own_coefficients() {
        let mut params = reference_params();
        let bt = params.resolve(LIB).unwrap();
        params.battery_manufacturing_energy.assembly = ProcessCoefficients {
            electric_energy_consumption: TypeTable::from([(LIB, 100.0)]),
            gas_consumption: TypeTable::from([(LIB, 0.0)]),
        };
        let e = manufacturing_energy(&params, &bt, 1000.0).unwrap();
        assert!((e.process(Process::Assembly).unwrap().total - 100.0).abs() < 1e-12);
        let formation = e.process(Process::FormationAging).unwrap();
        assert!((formation.total - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_process_order_and_labels() {
        let labels: Vec<&str> = Process::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            ["Anode", "Electrolyte", "Cathode", "Assembly", "Formation_Aging", "Miscellaneous"]
        );
    }
}
