//! What the money lost would have grown to if invested instead

use crate::catalog::{InvestmentCatalog, InvestmentScenario};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentComparison {
    pub scenario: InvestmentScenario,
    pub current_value: f64,
    pub projected_value: f64,
    pub years_to_projection: u32,
    /// Growth forgone: `projected_value - current_value`
    pub opportunity_cost: f64,
}

/// `amount * (1 + annual_return/100)^years`, compounded annually
pub fn projected_value(amount: f64, annual_return: f64, years: u32) -> f64 {
    amount * (1.0 + annual_return / 100.0).powf(f64::from(years))
}

/// One comparison per scenario, in catalog order
pub fn investment_comparison(
    total_lost: f64,
    years: u32,
    catalog: &InvestmentCatalog,
) -> Vec<InvestmentComparison> {
    catalog
        .iter()
        .map(|scenario| {
            let projected = projected_value(total_lost, scenario.annual_return, years);
            InvestmentComparison {
                scenario: scenario.clone(),
                current_value: total_lost,
                projected_value: projected,
                years_to_projection: years,
                opportunity_cost: projected - total_lost,
            }
        })
        .collect()
}

/// Horizons shown alongside a comparison, in years
pub const MILESTONE_YEARS: [u32; 4] = [0, 5, 10, 20];

/// Projected value of `amount` at each of the given horizons
pub fn growth_milestones(
    amount: f64,
    scenario: &InvestmentScenario,
    years: &[u32],
) -> Vec<(u32, f64)> {
    years
        .iter()
        .map(|&y| (y, projected_value(amount, scenario.annual_return, y)))
        .collect()
}

/// Comparison with the largest opportunity cost (first one on ties)
pub fn largest_opportunity_cost(
    comparisons: &[InvestmentComparison],
) -> Option<&InvestmentComparison> {
    comparisons.iter().fold(None, |best: Option<&InvestmentComparison>, c| match best {
        Some(b) if b.opportunity_cost >= c.opportunity_cost => Some(b),
        _ => Some(c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_index_fund_ten_years() {
        let catalog = InvestmentCatalog::default();
        let comparisons = investment_comparison(1000.0, 10, &catalog);

        let sp500 = &comparisons[0];
        assert_eq!(sp500.scenario.name, "S&P 500 Index Fund");
        assert_abs_diff_eq!(sp500.projected_value, 2593.74, epsilon = 0.01);
        assert_abs_diff_eq!(sp500.opportunity_cost, 1593.74, epsilon = 0.01);
        assert_eq!(sp500.current_value, 1000.0);
        assert_eq!(sp500.years_to_projection, 10);
    }

    #[test]
    fn test_catalog_order_kept() {
        let catalog = InvestmentCatalog::default();
        let comparisons = investment_comparison(500.0, 3, &catalog);
        let names: Vec<&str> = comparisons.iter().map(|c| c.scenario.name.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, expected);
    }

    #[test]
    fn test_zero_years_no_cost() {
        let comparisons = investment_comparison(750.0, 0, &InvestmentCatalog::default());
        assert!(comparisons.iter().all(|c| c.opportunity_cost == 0.0));
    }

    #[test]
    fn test_employer_match_doubles_yearly() {
        let comparisons = investment_comparison(100.0, 3, &InvestmentCatalog::default());
        let matched = comparisons.iter().find(|c| c.scenario.name == "401(k) Match").unwrap();
        assert_abs_diff_eq!(matched.projected_value, 800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_largest_opportunity_cost() {
        let comparisons = investment_comparison(100.0, 10, &InvestmentCatalog::default());
        let best = largest_opportunity_cost(&comparisons).unwrap();

        assert_eq!(best.scenario.name, "401(k) Match");
        assert!(largest_opportunity_cost(&[]).is_none());
    }

    #[test]
    fn test_growth_milestones() {
        let scenario = InvestmentCatalog::default().iter().next().cloned().unwrap();
        let points = growth_milestones(1000.0, &scenario, &MILESTONE_YEARS);

        assert_eq!(points.len(), 4);
        assert_eq!(points[0], (0, 1000.0));
        assert_abs_diff_eq!(points[1].1, 1610.51, epsilon = 0.01);
        assert_abs_diff_eq!(points[3].1, 6727.50, epsilon = 0.01);
    }
}
