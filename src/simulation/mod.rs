//! Financial recalculation of the projection table under simulation parameters

pub mod engine;
pub mod kpi;
mod rows;

pub use engine::{recalculate, SimulationEngine, SimulationParameters};
pub use kpi::{KpiSummary, INVESTMENT_BASE_ZAR};
pub use rows::{SimulatedQuarter, SimulationResult};
