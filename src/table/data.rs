//! Projection table rows matching the source workbook format

use serde::{Deserialize, Serialize};

/// One row of the quarterly projection table.
///
/// Revenue and net result carry the spreadsheet's raw ZAR figures; the
/// cumulative cash position is already expressed in FCFA and is never
/// re-derived from the other columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterRecord {
    /// Quarter identifier, e.g. "Q1"
    pub quarter_label: String,

    /// Fleet size at end of quarter (the fleet only grows in this model)
    pub cumulative_vehicles: u32,

    /// Quarterly revenue, ZAR
    pub revenue_zar: f64,

    /// Quarterly net result, ZAR
    pub net_result_zar: f64,

    /// Cumulative cash position, FCFA
    pub cumulative_cash_fcfa: f64,
}

impl QuarterRecord {
    pub fn new(
        quarter_label: impl Into<String>,
        cumulative_vehicles: u32,
        revenue_zar: f64,
        net_result_zar: f64,
        cumulative_cash_fcfa: f64,
    ) -> Self {
        Self {
            quarter_label: quarter_label.into(),
            cumulative_vehicles,
            revenue_zar,
            net_result_zar,
            cumulative_cash_fcfa,
        }
    }
}
