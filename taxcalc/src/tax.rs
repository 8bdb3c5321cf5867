use serde::{Deserialize, Serialize};

/// Salaries at or below this amount are taxed at the lower rate
pub const DEFAULT_THRESHOLD: f64 = 10_000_000.00;
/// Percentage applied up to and including the threshold
pub const DEFAULT_LOWER_RATE: f64 = 40.0;
/// Percentage applied above the threshold
pub const DEFAULT_UPPER_RATE: f64 = 53.0;

/// A two-bracket flat-rate tax rule.
///
/// The whole salary is taxed at a single rate chosen by comparing it against
/// `threshold`; there is no marginal split between brackets. Negative salaries
/// go through the same formula unguarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRule {
    pub threshold: f64,
    pub lower_rate: f64,
    pub upper_rate: f64,
}

impl Default for TaxRule {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            lower_rate: DEFAULT_LOWER_RATE,
            upper_rate: DEFAULT_UPPER_RATE,
        }
    }
}

impl TaxRule {
    /// Returns the bracket rate (a percentage) that applies to `salary`
    pub fn rate_for(&self, salary: f64) -> f64 {
        if salary <= self.threshold {
            self.lower_rate
        } else {
            self.upper_rate
        }
    }

    /// Computes the tax owed on `salary`
    pub fn tax(&self, salary: f64) -> f64 {
        salary * self.rate_for(salary) / 100.0
    }
}

/// Computes the tax owed on `salary` under the default 40% / 53% rule
pub fn compute_tax(salary: f64) -> f64 {
    TaxRule::default().tax(salary)
}
