//! Recomputed output rows for a simulation run

use serde::{Deserialize, Serialize};

use super::kpi::KpiSummary;
use crate::table::QuarterRecord;

/// A quarter with its derived FCFA revenue populated.
///
/// Produced fresh on every recomputation; never written back to the
/// source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedQuarter {
    pub quarter_label: String,
    pub cumulative_vehicles: u32,
    pub revenue_zar: f64,
    pub net_result_zar: f64,
    pub cumulative_cash_fcfa: f64,

    /// `revenue_zar × exchange_rate`
    pub revenue_fcfa: f64,
}

impl SimulatedQuarter {
    pub fn from_record(record: &QuarterRecord, exchange_rate: f64) -> Self {
        Self {
            quarter_label: record.quarter_label.clone(),
            cumulative_vehicles: record.cumulative_vehicles,
            revenue_zar: record.revenue_zar,
            net_result_zar: record.net_result_zar,
            cumulative_cash_fcfa: record.cumulative_cash_fcfa,
            revenue_fcfa: record.revenue_zar * exchange_rate,
        }
    }
}

/// Complete output of one recomputation: the full table plus its KPIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Recomputed quarters, in source order
    pub quarters: Vec<SimulatedQuarter>,

    /// Aggregate KPIs over all quarters
    pub kpis: KpiSummary,
}
