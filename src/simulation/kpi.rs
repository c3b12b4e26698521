//! KPI aggregation over the recomputed table
//!
//! Sums are taken over unrounded per-quarter values; rounding only
//! happens at the display and export boundaries.

use serde::{Deserialize, Serialize};

use super::rows::SimulatedQuarter;
use crate::error::WebfleetError;

/// Total capital invested in the venture, ZAR. ROI is measured against
/// this base converted at the current exchange rate.
pub const INVESTMENT_BASE_ZAR: f64 = 143_000.0;

/// The three dashboard KPIs, recomputed on every interaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Recomputed total revenue over all quarters, FCFA
    pub total_revenue_fcfa: f64,

    /// Total net result over all quarters, FCFA
    pub total_net_result_fcfa: f64,

    /// Cumulative return on the invested capital
    pub roi: f64,
}

impl KpiSummary {
    /// Aggregate the KPIs for a recomputed table.
    ///
    /// A zero exchange rate makes the ROI denominator collapse; that is
    /// reported as an explicit error instead of letting `inf`/`NaN` flow
    /// into the displayed figures.
    pub fn compute(
        quarters: &[SimulatedQuarter],
        exchange_rate: f64,
    ) -> Result<Self, WebfleetError> {
        let total_revenue_fcfa: f64 = quarters.iter().map(|q| q.revenue_fcfa).sum();
        let total_net_result_fcfa: f64 = quarters
            .iter()
            .map(|q| q.net_result_zar * exchange_rate)
            .sum();

        let invested_fcfa = INVESTMENT_BASE_ZAR * exchange_rate;
        if invested_fcfa == 0.0 {
            return Err(WebfleetError::UndefinedRoi);
        }

        Ok(Self {
            total_revenue_fcfa,
            total_net_result_fcfa,
            roi: total_net_result_fcfa / invested_fcfa,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::QuarterRecord;
    use approx::assert_relative_eq;

    fn simulated(quarters: &[QuarterRecord], rate: f64) -> Vec<SimulatedQuarter> {
        quarters
            .iter()
            .map(|q| SimulatedQuarter::from_record(q, rate))
            .collect()
    }

    #[test]
    fn test_roi_worked_example() {
        // Net results summing to 10,000 ZAR at rate 33.0:
        // net = 330,000 FCFA, invested = 143,000 * 33 = 4,719,000 FCFA
        let quarters = vec![
            QuarterRecord::new("Q1", 100, 50_000.0, 4_000.0, 0.0),
            QuarterRecord::new("Q2", 200, 60_000.0, 6_000.0, 0.0),
        ];
        let kpis = KpiSummary::compute(&simulated(&quarters, 33.0), 33.0).unwrap();

        assert_relative_eq!(kpis.total_net_result_fcfa, 330_000.0, epsilon = 1e-6);
        assert_relative_eq!(kpis.roi, 330_000.0 / 4_719_000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_total_revenue_is_sum_of_recomputed_column() {
        let quarters = vec![
            QuarterRecord::new("Q1", 100, 1_000.25, 0.0, 0.0),
            QuarterRecord::new("Q2", 150, 2_000.50, 0.0, 0.0),
            QuarterRecord::new("Q3", 210, 3_000.75, 0.0, 0.0),
        ];
        let rows = simulated(&quarters, 12.5);
        let kpis = KpiSummary::compute(&rows, 12.5).unwrap();

        let expected: f64 = rows.iter().map(|q| q.revenue_fcfa).sum();
        assert_relative_eq!(kpis.total_revenue_fcfa, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_is_explicit_error() {
        let quarters = vec![QuarterRecord::new("Q1", 100, 50_000.0, 4_000.0, 0.0)];
        let err = KpiSummary::compute(&simulated(&quarters, 0.0), 0.0).unwrap_err();
        assert!(matches!(err, WebfleetError::UndefinedRoi));
    }

    #[test]
    fn test_negative_rate_propagates() {
        // Negative rates are arithmetic nonsense the caller may still ask
        // for; the sums and ROI carry the sign through faithfully.
        let quarters = vec![QuarterRecord::new("Q1", 100, 50_000.0, 4_000.0, 0.0)];
        let kpis = KpiSummary::compute(&simulated(&quarters, -2.0), -2.0).unwrap();

        assert_relative_eq!(kpis.total_revenue_fcfa, -100_000.0, epsilon = 1e-6);
        assert_relative_eq!(kpis.roi, -8_000.0 / -286_000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_table_sums_to_zero() {
        let kpis = KpiSummary::compute(&[], 33.0).unwrap();
        assert_eq!(kpis.total_revenue_fcfa, 0.0);
        assert_eq!(kpis.total_net_result_fcfa, 0.0);
        assert_eq!(kpis.roi, 0.0);
    }
}
