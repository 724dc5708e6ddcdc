//! Vendor name extraction.

use super::FieldRule;
use super::patterns::{VENDOR_LABELED, VENDOR_LINE};

/// Recovers the vendor name.
///
/// Primary rule: the first full line consisting of an uppercase-led run
/// of name characters — vendor names usually head the invoice. Fallback:
/// a "Bill From"/"From" label. Lines carrying digits or punctuation
/// outside the name alphabet (labels, amounts, dates) never qualify.
pub struct VendorRule;

impl FieldRule for VendorRule {
    type Output = String;

    fn name(&self) -> &'static str {
        "vendor"
    }

    fn apply(&self, text: &str) -> Option<String> {
        if let Some(caps) = VENDOR_LINE.captures(text) {
            return Some(caps[1].trim().to_string());
        }

        VENDOR_LABELED
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leading_company_line() {
        let text = "ACME SUPPLIES LLC\nInvoice #INV-001\nTotal: $70.00";
        assert_eq!(VendorRule.apply(text), Some("ACME SUPPLIES LLC".to_string()));
    }

    #[test]
    fn test_mixed_case_name_with_punctuation() {
        let text = "Smith & Sons, Inc.\nInvoice 42";
        assert_eq!(
            VendorRule.apply(text),
            Some("Smith & Sons, Inc.".to_string())
        );
    }

    #[test]
    fn test_label_lines_do_not_qualify() {
        // Every line carries digits or characters outside the name class.
        let text = "Total Due: $1,234.56";
        assert_eq!(VendorRule.apply(text), None);
    }

    #[test]
    fn test_bill_from_fallback() {
        let text = "invoice 77\nBill From: Initech Corp\nTotal: $5.00";
        assert_eq!(VendorRule.apply(text), Some("Initech Corp".to_string()));
    }

    #[test]
    fn test_lowercase_line_rejected() {
        assert_eq!(VendorRule.apply("acme supplies"), None);
    }
}
