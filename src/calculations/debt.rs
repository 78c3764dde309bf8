//! Debt payoff delay caused by gambling losses
//!
//! The loss is modeled as extra principal on the same payment schedule.

use super::{Horizon, WEEKS_PER_MONTH};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtImpact {
    /// Months to pay off the debt alone
    pub original_months: Horizon,
    /// Months to pay off the debt plus the gambling loss
    pub new_months: Horizon,
    pub original_payoff_date: Option<NaiveDate>,
    pub new_payoff_date: Option<NaiveDate>,
    /// Extra weeks of payments; unbounded when the larger balance never clears
    pub delay_in_weeks: Horizon,
}

/// Months of level payments needed to retire `principal`
///
/// Standard annuity solution `n = -ln(1 - P*r/A) / ln(1 + r)` with monthly
/// rate `r`. When the payment does not exceed the monthly interest the
/// balance never shrinks and the result is [`Horizon::Unbounded`]; the
/// logarithm is never taken of a non-positive value.
pub fn months_to_payoff(principal: f64, monthly_payment: f64, annual_rate_pct: f64) -> Horizon {
    let rate = annual_rate_pct / 12.0 / 100.0;

    if principal.is_nan() || monthly_payment.is_nan() || rate.is_nan() {
        return Horizon::Finite(f64::NAN);
    }
    if principal <= 0.0 {
        return Horizon::Finite(0.0);
    }
    if rate == 0.0 {
        return if monthly_payment > 0.0 {
            Horizon::Finite(principal / monthly_payment)
        } else {
            Horizon::Unbounded
        };
    }

    let monthly_interest = principal * rate;
    if monthly_payment <= monthly_interest {
        return Horizon::Unbounded;
    }

    Horizon::Finite(-(1.0 - monthly_interest / monthly_payment).ln() / (1.0 + rate).ln())
}

/// Payoff schedules with and without the gambling loss, dated from today's
/// local date
pub fn debt_impact(
    debt_amount: f64,
    monthly_payment: f64,
    annual_rate_pct: f64,
    gambling_loss: f64,
) -> DebtImpact {
    debt_impact_as_of(
        debt_amount,
        monthly_payment,
        annual_rate_pct,
        gambling_loss,
        Local::now().date_naive(),
    )
}

/// Same as [`debt_impact`] with an explicit start date
pub fn debt_impact_as_of(
    debt_amount: f64,
    monthly_payment: f64,
    annual_rate_pct: f64,
    gambling_loss: f64,
    today: NaiveDate,
) -> DebtImpact {
    let original_months = months_to_payoff(debt_amount, monthly_payment, annual_rate_pct);
    let new_months =
        months_to_payoff(debt_amount + gambling_loss, monthly_payment, annual_rate_pct);

    let delay_in_weeks = match (original_months, new_months) {
        (Horizon::Finite(original), Horizon::Finite(new)) => {
            Horizon::Finite(((new - original) * WEEKS_PER_MONTH).ceil())
        }
        (Horizon::Finite(_), Horizon::Unbounded) => Horizon::Unbounded,
        // Already never paid off: nothing further to delay
        (Horizon::Unbounded, _) => Horizon::Finite(0.0),
    };

    log::debug!(
        "Debt impact: {:?} -> {:?} months, delay {:?} weeks",
        original_months,
        new_months,
        delay_in_weeks
    );

    DebtImpact {
        original_months,
        new_months,
        original_payoff_date: original_months.payoff_date(today),
        new_payoff_date: new_months.payoff_date(today),
        delay_in_weeks,
    }
}
