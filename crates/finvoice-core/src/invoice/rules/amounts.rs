//! Total amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::FieldRule;
use super::patterns::TOTAL_AMOUNT;

/// Matches a labeled grand total ("Total", "Total Due", "Amount Due",
/// "Grand Total", "Balance Due") with an optional currency symbol.
pub struct TotalAmountRule;

impl FieldRule for TotalAmountRule {
    type Output = Decimal;

    fn name(&self) -> &'static str {
        "total_amount"
    }

    fn apply(&self, text: &str) -> Option<Decimal> {
        let caps = TOTAL_AMOUNT.captures(text)?;
        parse_amount(&caps[1])
    }
}

/// Parse a monetary amount, stripping comma thousands separators and any
/// leading currency symbol.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(&cleaned).ok()
}
