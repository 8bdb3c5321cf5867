use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::tax::TaxRule;

/// One taxpayer: name, company, salary and the tax owed on that salary.
///
/// `tax_owed` is fixed when the record is built and can't be set independently,
/// so a record stays coherent however often it is moved around.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxpayerRecord {
    name: String,
    company: String,
    salary: f64,
    tax_owed: f64,
}

impl TaxpayerRecord {
    /// Creates a record, computing the tax owed under `rule`
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        salary: f64,
        rule: &TaxRule,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            salary,
            tax_owed: rule.tax(salary),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn tax_owed(&self) -> f64 {
        self.tax_owed
    }

    /// Writes the four-line file block followed by a blank line
    pub fn write_block<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(
            writer,
            "{}\n{}\n{}\n{}\n\n",
            self.name,
            self.company,
            format_amount(self.salary),
            format_amount(self.tax_owed)
        )
    }
}

/// Labelled console form, one field per line
impl fmt::Display for TaxpayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nCompany: {}\nSalary: {}\nTax Owed: {}\n",
            self.name,
            self.company,
            format_amount(self.salary),
            format_amount(self.tax_owed)
        )
    }
}

/// Formats an amount with exactly two fractional digits.
///
/// Rounds the shortest decimal form of `amount` half away from zero, so
/// `6360000.265` prints as `6360000.27` even though the nearest double sits
/// just below the midpoint. Values outside `Decimal`'s range (or non-finite)
/// fall back to plain float formatting.
pub fn format_amount(amount: f64) -> String {
    match Decimal::from_str(&amount.to_string()) {
        Ok(value) => {
            let mut rounded =
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        Err(_) => format!("{:.2}", amount),
    }
}
