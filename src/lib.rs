//! Webfleet Cameroun - financial projection and simulation engine
//!
//! This library provides:
//! - Quarterly projection table ingestion (xlsx workbook or CSV export)
//! - Dynamic FCFA recomputation under user-tunable simulation parameters
//! - KPI aggregation (total revenue, total net result, cumulative ROI)
//! - Pro-rata multi-investor ownership split
//! - Fixed-layout KPI report export

pub mod error;
pub mod investors;
pub mod report;
pub mod session;
pub mod simulation;
pub mod table;

// Re-export commonly used types
pub use error::WebfleetError;
pub use investors::{allocate, InvestorAllocation, MAX_INVESTORS};
pub use report::KpiReport;
pub use session::DashboardSession;
pub use simulation::{recalculate, KpiSummary, SimulationEngine, SimulationParameters, SimulationResult};
pub use table::QuarterRecord;
