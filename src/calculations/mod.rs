//! Pure calculations over session records and debt terms
//!
//! Nothing in here performs I/O or keeps state between calls. Every function
//! is total: divide-by-zero and invalid-logarithm cases return a defined
//! sentinel (`0` or [`Horizon::Unbounded`]) and non-finite inputs propagate.

mod edge;
mod profile;
mod profitability;
mod investment;
mod debt;
mod format;
pub mod analytics;

pub use edge::personal_edge;
pub use profile::{compare_edges, theoretical_edge, user_profile, EdgeComparison, UserProfile};
pub use profitability::{profile_profitability, profitability_analysis, ProfitabilityAnalysis};
pub use investment::{
    growth_milestones, investment_comparison, largest_opportunity_cost, projected_value,
    InvestmentComparison, MILESTONE_YEARS,
};
pub use debt::{debt_impact, debt_impact_as_of, months_to_payoff, DebtImpact};
pub use format::{format_currency, format_currency_in, format_percentage, parse_currency, Currency};

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Documented approximations
// ============================================================================
// Fixed approximations, not statistical or calendar models.

/// Fixed weeks-per-month factor used to convert a payoff delay to weeks
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Probability-of-profit heuristic: `BASE - edge * SLOPE`, clamped to [0, 100]
pub const PROFIT_PROBABILITY_BASE: f64 = 50.0;
pub const PROFIT_PROBABILITY_SLOPE: f64 = 5.0;

/// Horizon used by callers that do not choose one for opportunity-cost projections
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;

/// A span of time (months or weeks, per field) that may never end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Horizon {
    Finite(f64),
    /// The balance never reaches zero at this rate
    Unbounded,
}

impl Horizon {
    pub fn finite(&self) -> Option<f64> {
        match self {
            Horizon::Finite(v) => Some(*v),
            Horizon::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Horizon::Unbounded)
    }

    /// `today` advanced by `ceil(months)` calendar months
    ///
    /// `None` when unbounded, non-finite, or outside chrono's date range.
    pub fn payoff_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        let months = self.finite()?.ceil();
        if !months.is_finite() || months.abs() > f64::from(u32::MAX) {
            return None;
        }
        if months >= 0.0 {
            today.checked_add_months(Months::new(months as u32))
        } else {
            today.checked_sub_months(Months::new((-months) as u32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_date_rounds_up_months() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

        assert_eq!(
            Horizon::Finite(0.2).payoff_date(today),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
        assert_eq!(
            Horizon::Finite(12.0).payoff_date(today),
            NaiveDate::from_ymd_opt(2027, 1, 31)
        );
        assert_eq!(Horizon::Finite(0.0).payoff_date(today), Some(today));
    }

    #[test]
    fn test_payoff_date_sentinels() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert_eq!(Horizon::Unbounded.payoff_date(today), None);
        assert_eq!(Horizon::Finite(f64::NAN).payoff_date(today), None);
        assert_eq!(Horizon::Finite(1e12).payoff_date(today), None);
    }

    #[test]
    fn test_horizon_serializes_tagged() {
        let json = serde_json::to_string(&Horizon::Finite(50.0)).unwrap();
        assert_eq!(json, r#"{"kind":"finite","value":50.0}"#);
        let json = serde_json::to_string(&Horizon::Unbounded).unwrap();
        assert_eq!(json, r#"{"kind":"unbounded"}"#);
    }
}
