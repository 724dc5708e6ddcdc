//! Invoice number extraction.

use super::FieldRule;
use super::patterns::{INVOICE_NUMBER_LABELED, INVOICE_NUMBER_PREFIXED};

/// Matches a labeled invoice number ("Invoice #..." / "Invoice: ...") or
/// a bare "INV"-prefixed token.
pub struct InvoiceNumberRule;

impl FieldRule for InvoiceNumberRule {
    type Output = String;

    fn name(&self) -> &'static str {
        "invoice_number"
    }

    fn apply(&self, text: &str) -> Option<String> {
        if let Some(caps) = INVOICE_NUMBER_LABELED.captures(text) {
            return Some(caps[1].trim().to_string());
        }

        INVOICE_NUMBER_PREFIXED
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}
