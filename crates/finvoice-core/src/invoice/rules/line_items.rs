//! Line item extraction and arithmetic reconciliation.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use super::amounts::parse_amount;
use super::patterns::LINE_ITEM;
use crate::models::invoice::InvoiceLineItem;

/// Extract reconciled line items, in source order.
///
/// Each line is matched against the shape
/// `<description> <quantity> <unit price> <line total>`. A candidate is
/// kept only when `quantity * unit_price` lands within one cent of the
/// parsed total; anything else is a false positive (prose that happens to
/// end in numbers) and is dropped silently. Zero items is valid output.
pub fn extract_line_items(text: &str) -> Vec<InvoiceLineItem> {
    text.lines().filter_map(parse_candidate).collect()
}

fn parse_candidate(line: &str) -> Option<InvoiceLineItem> {
    let caps = LINE_ITEM.captures(line.trim())?;

    let description = caps[1].trim().to_string();
    if description.is_empty() {
        return None;
    }

    let quantity = Decimal::from_str(&caps[2]).ok()?;
    if quantity <= Decimal::ZERO {
        return None;
    }

    let item = InvoiceLineItem {
        description,
        quantity,
        unit_price: parse_amount(&caps[3])?,
        line_total: parse_amount(&caps[4])?,
    };

    if item.reconciles() {
        Some(item)
    } else {
        trace!(line, "dropping arithmetically inconsistent line item");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extracts_matching_rows_in_order() {
        let text = "ACME SUPPLIES LLC\n\
                    Widget A 2 10.00 20.00\n\
                    Service Fee 1 50.00 50.00\n\
                    Total: $70.00";

        let items = extract_line_items(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Widget A");
        assert_eq!(items[0].quantity, dec("2"));
        assert_eq!(items[0].unit_price, dec("10.00"));
        assert_eq!(items[0].line_total, dec("20.00"));
        assert_eq!(items[1].description, "Service Fee");
    }

    #[test]
    fn test_inconsistent_row_dropped() {
        // 2 x 10.00 is nowhere near 50.00.
        let items = extract_line_items("Widget 2 10.00 50.00");
        assert!(items.is_empty());
    }

    #[test]
    fn test_cent_rounding_drift_accepted() {
        // 3 x 3.33 = 9.99; a total of 10.00 is off by a full cent and out.
        assert!(extract_line_items("Rope 3 3.33 10.00").is_empty());
        // 1.5 x 2.01 = 3.015; a total of 3.02 is within tolerance.
        let items = extract_line_items("Wire 1.5 2.01 3.02");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_currency_symbols_on_prices() {
        let items = extract_line_items("Consulting 4 $25.00 $100.00");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].line_total, dec("100.00"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        assert!(extract_line_items("Ghost item 0 5.00 0.00").is_empty());
    }

    #[test]
    fn test_prose_lines_ignored() {
        let text = "Thank you for your business\nDate: 01/15/2024\nTotal: $70.00";
        assert!(extract_line_items(text).is_empty());
    }
}
