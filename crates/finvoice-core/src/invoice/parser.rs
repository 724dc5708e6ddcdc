//! Heuristic invoice parser applying the rule cascade.

use tracing::{debug, warn};

use crate::error::ParseError;
use crate::models::invoice::InvoiceData;

use super::rules::{
    DateRule, FieldRule, InvoiceNumberRule, TotalAmountRule, VendorRule, extract_line_items,
};

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse structured invoice data from plain text.
    fn parse(&self, text: &str) -> Result<InvoiceData, ParseError>;
}

/// Parser encoding common English-language invoice conventions as an
/// ordered cascade of independent rules.
///
/// Each field is optional on its own; the parse fails only when invoice
/// number, vendor, and total amount are all simultaneously unrecovered.
/// Output is deterministic for identical input text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicInvoiceParser;

impl HeuristicInvoiceParser {
    pub fn new() -> Self {
        Self
    }
}

impl InvoiceParser for HeuristicInvoiceParser {
    fn parse(&self, text: &str) -> Result<InvoiceData, ParseError> {
        debug!(chars = text.len(), "parsing invoice text");

        let data = InvoiceData {
            invoice_number: InvoiceNumberRule.apply(text),
            date: DateRule.apply(text),
            vendor: VendorRule.apply(text),
            total_amount: TotalAmountRule.apply(text),
            line_items: extract_line_items(text),
        };

        if !data.has_essential_field() {
            warn!("no essential invoice fields recovered");
            return Err(ParseError::NoEssentialFields);
        }

        debug!(
            invoice_number = ?data.invoice_number,
            vendor = ?data.vendor,
            total = ?data.total_amount,
            line_items = data.line_items.len(),
            "invoice parsed"
        );

        Ok(data)
    }
}

/// Parse invoice text with the default heuristic parser.
pub fn parse_invoice_data(text: &str) -> Result<InvoiceData, ParseError> {
    HeuristicInvoiceParser::new().parse(text)
}
