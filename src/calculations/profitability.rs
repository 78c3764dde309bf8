//! Bankroll burn-down under a steady house edge

use super::{Horizon, UserProfile, PROFIT_PROBABILITY_BASE, PROFIT_PROBABILITY_SLOPE};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitabilityAnalysis {
    pub bankroll: f64,
    pub average_bet: f64,
    /// House edge in percent
    pub game_edge: f64,
    pub sessions_per_month: f64,
    pub monthly_loss: f64,
    /// Months until the bankroll is gone
    pub time_to_zero: Horizon,
    /// Heuristic percentage, see [`PROFIT_PROBABILITY_BASE`]
    pub probability_of_profit: f64,
}

/// Expected monthly loss and how long the bankroll lasts
///
/// Inputs are taken as given. A non-positive monthly loss means the bankroll
/// is never exhausted ([`Horizon::Unbounded`]); other odd inputs produce
/// the formula's natural result, e.g. a negative bankroll gives a negative
/// time to zero.
pub fn profitability_analysis(
    bankroll: f64,
    average_bet: f64,
    game_edge: f64,
    sessions_per_month: f64,
) -> ProfitabilityAnalysis {
    let monthly_loss = average_bet * game_edge / 100.0 * sessions_per_month;

    let time_to_zero = if monthly_loss > 0.0 || monthly_loss.is_nan() {
        Horizon::Finite(bankroll / monthly_loss)
    } else {
        Horizon::Unbounded
    };

    // Linear placeholder, not a variance model
    let probability_of_profit =
        (PROFIT_PROBABILITY_BASE - game_edge * PROFIT_PROBABILITY_SLOPE).clamp(0.0, 100.0);

    ProfitabilityAnalysis {
        bankroll,
        average_bet,
        game_edge,
        sessions_per_month,
        monthly_loss,
        time_to_zero,
        probability_of_profit,
    }
}

/// Projection seeded from the player's own history
///
/// Bankroll is the total wagered so far, the bet is the average session loss
/// and the edge is the personal edge. Each falls back to a placeholder (1000,
/// 100, 5%) when zero, and the pace assumes sessions were logged over three
/// months, with at least 4 a month when there is no history.
pub fn profile_profitability(profile: &UserProfile) -> ProfitabilityAnalysis {
    let or = |value: f64, fallback: f64| if value == 0.0 { fallback } else { value };
    let sessions_per_month = match profile.sessions_count.div_ceil(3) {
        0 => 4.0,
        n => n as f64,
    };

    profitability_analysis(
        or(profile.total_gambled, 1000.0),
        or(profile.average_session_loss, 100.0),
        or(profile.personal_edge, 5.0),
        sessions_per_month,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::user_profile;
    use crate::catalog::GameCatalog;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_projection() {
        let analysis = profitability_analysis(1000.0, 50.0, 5.0, 8.0);

        assert_relative_eq!(analysis.monthly_loss, 20.0);
        assert_eq!(analysis.time_to_zero, Horizon::Finite(50.0));
        assert_relative_eq!(analysis.probability_of_profit, 25.0);
        assert_eq!(analysis.bankroll, 1000.0);
        assert_eq!(analysis.sessions_per_month, 8.0);
    }

    #[test]
    fn test_zero_edge_never_goes_broke() {
        let analysis = profitability_analysis(1000.0, 50.0, 0.0, 8.0);

        assert_eq!(analysis.monthly_loss, 0.0);
        assert!(analysis.time_to_zero.is_unbounded());
        assert_eq!(analysis.probability_of_profit, 50.0);
    }

    #[test]
    fn test_probability_clamped() {
        assert_eq!(profitability_analysis(1.0, 1.0, 25.0, 1.0).probability_of_profit, 0.0);
        assert_eq!(profitability_analysis(1.0, 1.0, -30.0, 1.0).probability_of_profit, 100.0);
    }

    #[test]
    fn test_negative_bankroll_is_not_an_error() {
        let analysis = profitability_analysis(-500.0, 50.0, 5.0, 8.0);
        assert_eq!(analysis.time_to_zero, Horizon::Finite(-25.0));
    }

    #[test]
    fn test_nan_propagates() {
        let analysis = profitability_analysis(1000.0, f64::NAN, 5.0, 8.0);

        assert!(analysis.monthly_loss.is_nan());
        assert!(analysis.time_to_zero.finite().map(f64::is_nan).unwrap_or(false));

        let analysis = profitability_analysis(1000.0, 50.0, f64::NAN, 8.0);
        assert!(analysis.probability_of_profit.is_nan());
    }

    #[test]
    fn test_profile_fallbacks() {
        let profile = user_profile(&[], &GameCatalog::default());
        let analysis = profile_profitability(&profile);

        assert_eq!(analysis.bankroll, 1000.0);
        assert_eq!(analysis.average_bet, 100.0);
        assert_eq!(analysis.game_edge, 5.0);
        assert_eq!(analysis.sessions_per_month, 4.0);
        assert_relative_eq!(analysis.monthly_loss, 20.0);
    }
}
