//! Pro-rata multi-investor ownership split
//!
//! The valuation baseline is the recomputed total revenue, used as a
//! post-money valuation proxy. Percentages are deliberately NOT
//! normalized: contributions exceeding the baseline legitimately claim
//! more than 100% in total, and that is surfaced to the user as
//! information rather than an error.

use serde::{Deserialize, Serialize};

use crate::error::WebfleetError;

/// Upper bound on investors the dashboard collects. Enforced by the
/// interactive layer; the calculator itself accepts any non-empty list.
pub const MAX_INVESTORS: usize = 10;

/// One row of the ownership-split table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorAllocation {
    /// 1-based investor number; output order matches input order
    pub investor: u32,

    /// Display label, e.g. "Investisseur 1"
    pub label: String,

    /// Amount contributed, FCFA
    pub contribution_fcfa: f64,

    /// Share of the valuation baseline, percent, rounded to 2 decimals
    pub ownership_pct: f64,
}

/// Split ownership pro-rata across the contributions.
///
/// `ownership_pct = round(100 × contribution / valuation_baseline, 2)`
/// per investor. A zero baseline makes every share undefined and is
/// reported as an explicit error rather than letting `inf`/`NaN` through.
pub fn allocate(
    contributions: &[f64],
    valuation_baseline: f64,
) -> Result<Vec<InvestorAllocation>, WebfleetError> {
    if contributions.is_empty() {
        return Err(WebfleetError::InvalidParameter {
            name: "contributions".to_string(),
            reason: "at least one investor is required".to_string(),
        });
    }
    if let Some(amount) = contributions.iter().find(|c| **c < 0.0) {
        return Err(WebfleetError::InvalidParameter {
            name: "contributions".to_string(),
            reason: format!("contributions must be non-negative, got {amount}"),
        });
    }
    if valuation_baseline == 0.0 {
        return Err(WebfleetError::UndefinedValuation);
    }

    Ok(contributions
        .iter()
        .enumerate()
        .map(|(i, &contribution_fcfa)| {
            let pct = contribution_fcfa / valuation_baseline * 100.0;
            InvestorAllocation {
                investor: (i + 1) as u32,
                label: format!("Investisseur {}", i + 1),
                contribution_fcfa,
                ownership_pct: round2(pct),
            }
        })
        .collect())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
