//! Per-session dashboard state
//!
//! One session owns the loaded projection table plus the current
//! simulation parameters. Every interaction recomputes the derived
//! values from scratch through the pure calculators; nothing derived is
//! cached between interactions.

use std::path::Path;

use crate::error::WebfleetError;
use crate::investors::{allocate, InvestorAllocation};
use crate::report::KpiReport;
use crate::simulation::{SimulationEngine, SimulationParameters, SimulationResult};
use crate::table::{load_csv, load_workbook, QuarterRecord};

#[derive(Debug, Clone)]
pub struct DashboardSession {
    quarters: Vec<QuarterRecord>,
    params: SimulationParameters,
}

impl DashboardSession {
    /// Create a session from the source workbook
    pub fn from_workbook<P: AsRef<Path>>(path: P) -> Result<Self, WebfleetError> {
        Ok(Self::with_quarters(load_workbook(path)?))
    }

    /// Create a session from a CSV export of the projection table
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, WebfleetError> {
        Ok(Self::with_quarters(load_csv(path)?))
    }

    /// Create a session around an already-loaded table
    pub fn with_quarters(quarters: Vec<QuarterRecord>) -> Self {
        Self {
            quarters,
            params: SimulationParameters::default(),
        }
    }

    pub fn quarters(&self) -> &[QuarterRecord] {
        &self.quarters
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SimulationParameters {
        &mut self.params
    }

    pub fn set_params(&mut self, params: SimulationParameters) {
        self.params = params;
    }

    /// Recompute the full table and KPIs with the current parameters
    pub fn run(&self) -> Result<SimulationResult, WebfleetError> {
        SimulationEngine::new(self.params.clone()).run(&self.quarters)
    }

    /// Split ownership across the contributions, against the freshly
    /// recomputed CA-total baseline
    pub fn allocate(&self, contributions: &[f64]) -> Result<Vec<InvestorAllocation>, WebfleetError> {
        let result = self.run()?;
        allocate(contributions, result.kpis.total_revenue_fcfa)
    }

    /// Recompute the KPIs and write the report artifact
    pub fn export_report<P: AsRef<Path>>(&self, path: P) -> Result<KpiReport, WebfleetError> {
        let result = self.run()?;
        let report = KpiReport::from_summary(&result.kpis);
        report.write_to(path)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_session() -> DashboardSession {
        DashboardSession::with_quarters(vec![
            QuarterRecord::new("Q1", 150, 42_000.0, -3_500.0, -1_200_000.0),
            QuarterRecord::new("Q2", 320, 88_000.0, 1_500.0, -650_000.0),
            QuarterRecord::new("Q3", 540, 151_000.0, 9_800.0, 420_000.0),
        ])
    }

    #[test]
    fn test_run_with_default_params() {
        let session = test_session();
        let result = session.run().unwrap();

        assert_eq!(result.quarters.len(), 3);
        assert_relative_eq!(
            result.kpis.total_revenue_fcfa,
            (42_000.0 + 88_000.0 + 151_000.0) * 33.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_parameter_change_recomputes_everything() {
        let mut session = test_session();
        let before = session.run().unwrap();

        session.params_mut().exchange_rate = 66.0;
        let after = session.run().unwrap();

        assert_relative_eq!(
            after.kpis.total_revenue_fcfa,
            2.0 * before.kpis.total_revenue_fcfa,
            epsilon = 1e-6
        );
        // ROI is rate-invariant: both numerator and denominator scale
        assert_relative_eq!(after.kpis.roi, before.kpis.roi, epsilon = 1e-12);
    }

    #[test]
    fn test_allocate_uses_recomputed_baseline() {
        let session = test_session();
        let baseline = session.run().unwrap().kpis.total_revenue_fcfa;

        let allocations = session.allocate(&[baseline / 2.0]).unwrap();
        assert_eq!(allocations.len(), 1);
        assert_relative_eq!(allocations[0].ownership_pct, 50.00, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_table_allocation_degenerates_explicitly() {
        let session = DashboardSession::with_quarters(Vec::new());
        let err = session.allocate(&[1_000_000.0]).unwrap_err();
        assert!(matches!(err, WebfleetError::UndefinedValuation));
    }

    #[test]
    fn test_export_report_writes_current_kpis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rapport_webfleet.txt");

        let session = test_session();
        let report = session.export_report(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, report.render());
        assert!(contents.starts_with("Rapport de Simulation Webfleet Cameroun"));
    }
}
