//! Investment scenarios used for opportunity-cost comparisons

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentScenario {
    pub name: String,
    /// Annual return in percent (10.0 = 10%)
    pub annual_return: f64,
    pub description: String,
}

/// Fixed, ordered set of scenarios. Comparisons are reported in this order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentCatalog {
    scenarios: Vec<InvestmentScenario>,
}

impl InvestmentCatalog {
    /// Create from loaded CSV rows
    pub fn from_loaded(rows: &[InvestmentScenario]) -> Self {
        Self {
            scenarios: rows.to_vec(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&InvestmentScenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvestmentScenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for InvestmentCatalog {
    fn default() -> Self {
        let scenario = |name: &str, annual_return: f64, description: &str| InvestmentScenario {
            name: name.to_string(),
            annual_return,
            description: description.to_string(),
        };

        Self {
            scenarios: vec![
                scenario("S&P 500 Index Fund", 10.0, "Historical average return of S&P 500"),
                scenario("High-Yield Savings", 4.0, "Current high-yield savings account rates"),
                scenario("Debt Payoff", 15.0, "Average credit card interest saved"),
                scenario("401(k) Match", 100.0, "Employer 401(k) matching contribution"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let catalog = InvestmentCatalog::default();
        let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["S&P 500 Index Fund", "High-Yield Savings", "Debt Payoff", "401(k) Match"]
        );
    }
}
