//! Invoice data produced by the OCR parsing pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Absolute tolerance for monetary reconciliation (one cent).
///
/// OCR output carries cent-level rounding drift; a candidate line item is
/// accepted only when `|quantity * unit_price - line_total|` stays below
/// this value.
pub const MONETARY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Structured invoice data recovered from OCR text.
///
/// A one-shot parse result: created fresh per upload, fully populated in a
/// single pass, and handed to the caller. Fields the parser could not
/// recover are left `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceData {
    /// Vendor-assigned invoice identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Invoice issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Extracted company/sender name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Invoice grand total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,

    /// Reconciled line items, in source order. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<InvoiceLineItem>,
}

impl InvoiceData {
    /// Whether at least one essential field (invoice number, vendor, or
    /// total amount) was recovered.
    pub fn has_essential_field(&self) -> bool {
        self.invoice_number.is_some() || self.vendor.is_some() || self.total_amount.is_some()
    }
}

/// A single reconciled line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Product/service description.
    pub description: String,

    /// Quantity (positive).
    pub quantity: Decimal,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Total for this line.
    pub line_total: Decimal,
}

impl InvoiceLineItem {
    /// Check the arithmetic invariant `quantity * unit_price ~= line_total`.
    pub fn reconciles(&self) -> bool {
        (self.quantity * self.unit_price - self.line_total).abs() < MONETARY_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_monetary_tolerance_is_one_cent() {
        assert_eq!(MONETARY_TOLERANCE, dec("0.01"));
    }

    #[test]
    fn test_line_item_reconciles() {
        let item = InvoiceLineItem {
            description: "Widget A".to_string(),
            quantity: dec("2"),
            unit_price: dec("10.00"),
            line_total: dec("20.00"),
        };
        assert!(item.reconciles());

        let off = InvoiceLineItem {
            line_total: dec("50.00"),
            ..item.clone()
        };
        assert!(!off.reconciles());
    }

    #[test]
    fn test_exact_tolerance_boundary_rejected() {
        // Drift of exactly one cent is outside the strict tolerance.
        let item = InvoiceLineItem {
            description: "Service".to_string(),
            quantity: dec("1"),
            unit_price: dec("10.00"),
            line_total: dec("10.01"),
        };
        assert!(!item.reconciles());
    }

    #[test]
    fn test_essential_field_detection() {
        let empty = InvoiceData::default();
        assert!(!empty.has_essential_field());

        let with_total = InvoiceData {
            total_amount: Some(dec("70.00")),
            ..InvoiceData::default()
        };
        assert!(with_total.has_essential_field());
    }
}
