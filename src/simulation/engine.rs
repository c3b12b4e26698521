//! Recomputation engine: parameters in, recomputed table + KPIs out

use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::kpi::KpiSummary;
use super::rows::{SimulatedQuarter, SimulationResult};
use crate::error::WebfleetError;
use crate::table::QuarterRecord;

/// Default unit sale price of a tracking box, FCFA (3430 ZAR at the default rate)
pub const DEFAULT_UNIT_PRICE_FCFA: f64 = 3430.0 * 33.0;

/// Default monthly client subscription price, FCFA (343 ZAR at the default rate)
pub const DEFAULT_SUBSCRIPTION_PRICE_FCFA: f64 = 343.0 * 33.0;

/// Default ZAR→FCFA exchange rate
pub const DEFAULT_EXCHANGE_RATE: f64 = 33.0;

/// Default quarterly growth slider value, percent
pub const DEFAULT_GROWTH_PCT: u8 = 20;

/// Valid range of the quarterly growth slider, percent
pub const GROWTH_PCT_RANGE: RangeInclusive<u8> = 10..=30;

/// User-tunable simulation parameters, one instance per interaction.
///
/// `unit_price_fcfa`, `subscription_price_fcfa` and `quarterly_growth_pct`
/// are collected and echoed back to the user but not consumed by the
/// recomputation: the pricing inputs are informational, and the growth
/// slider is reserved until a compounding model is decided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Prix de vente boîtier, FCFA
    pub unit_price_fcfa: f64,

    /// Prix abonnement client, FCFA/month
    pub subscription_price_fcfa: f64,

    /// ZAR→FCFA multiplier applied to every foreign-currency column
    pub exchange_rate: f64,

    /// Croissance trimestrielle, percent, within [10, 30]
    pub quarterly_growth_pct: u8,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            unit_price_fcfa: DEFAULT_UNIT_PRICE_FCFA,
            subscription_price_fcfa: DEFAULT_SUBSCRIPTION_PRICE_FCFA,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            quarterly_growth_pct: DEFAULT_GROWTH_PCT,
        }
    }
}

impl SimulationParameters {
    /// Caller-side validation of the interactive inputs.
    ///
    /// The recomputation itself propagates arithmetic faithfully (a zero
    /// or negative rate produces zero or negative FCFA amounts); this
    /// check is where the UI-level constraints live.
    pub fn validate(&self) -> Result<(), WebfleetError> {
        if !self.exchange_rate.is_finite() {
            return Err(WebfleetError::InvalidParameter {
                name: "exchange_rate".to_string(),
                reason: format!("must be a finite number, got {}", self.exchange_rate),
            });
        }
        if !GROWTH_PCT_RANGE.contains(&self.quarterly_growth_pct) {
            return Err(WebfleetError::InvalidParameter {
                name: "quarterly_growth_pct".to_string(),
                reason: format!(
                    "must be between {} and {}, got {}",
                    GROWTH_PCT_RANGE.start(),
                    GROWTH_PCT_RANGE.end(),
                    self.quarterly_growth_pct
                ),
            });
        }
        Ok(())
    }
}

/// Recompute the full table for the given exchange rate.
///
/// Elementwise and order-preserving: every record gets
/// `revenue_fcfa = revenue_zar × exchange_rate`, then the KPIs are
/// aggregated over the unrounded column. There is no partial or
/// incremental mode; the table is cheap enough to recompute whole.
pub fn recalculate(
    quarters: &[QuarterRecord],
    exchange_rate: f64,
) -> Result<SimulationResult, WebfleetError> {
    let simulated: Vec<SimulatedQuarter> = quarters
        .iter()
        .map(|q| SimulatedQuarter::from_record(q, exchange_rate))
        .collect();

    let kpis = KpiSummary::compute(&simulated, exchange_rate)?;

    Ok(SimulationResult {
        quarters: simulated,
        kpis,
    })
}

/// Recomputation engine bound to one set of parameters
pub struct SimulationEngine {
    params: SimulationParameters,
}

impl SimulationEngine {
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    /// Run one full recomputation over the given table
    pub fn run(&self, quarters: &[QuarterRecord]) -> Result<SimulationResult, WebfleetError> {
        debug!(
            "recomputing {} quarters at ZAR→FCFA rate {}",
            quarters.len(),
            self.params.exchange_rate
        );
        recalculate(quarters, self.params.exchange_rate)
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }
}
