//! Common regex patterns for invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number patterns
    pub static ref INVOICE_NUMBER_LABELED: Regex = Regex::new(
        r"(?i)invoice\s*#?[\s:]*([A-Za-z0-9][A-Za-z0-9-]*)"
    ).unwrap();

    pub static ref INVOICE_NUMBER_PREFIXED: Regex = Regex::new(
        r"(?i)\binv[-#]?\s*([A-Za-z0-9][A-Za-z0-9-]*)"
    ).unwrap();

    // Date label; captures the remainder of the line for token parsing.
    pub static ref DATE_LABEL: Regex = Regex::new(
        r"(?i)\b(?:invoice\s+date|date\s+issued|date)[\s:]+([^\n]+)"
    ).unwrap();

    // Date token patterns
    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_TEXTUAL: Regex = Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),?\s+(\d{4})"
    ).unwrap();

    // Vendor: a full line of uppercase-led name characters. Corporate
    // designators (LLC, INC, CORP, ...) fall inside the character class.
    pub static ref VENDOR_LINE: Regex = Regex::new(
        r"(?m)^[ \t]*([A-Z][A-Za-z&.,' -]{2,})$"
    ).unwrap();

    pub static ref VENDOR_LABELED: Regex = Regex::new(
        r"(?im)^(?:bill\s+from|from)[\s:]+([A-Z][A-Za-z&.,' -]+)"
    ).unwrap();

    // Total amount; longer labels first so "Total Due" is not shadowed by
    // the bare "Total" alternative.
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)\b(?:grand\s+total|amount\s+due|balance\s+due|total\s+due|total)[\s:]*[$€£]?\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    // Line item shape: description, quantity, unit price, line total.
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"^(.+?)\s+(\d+(?:\.\d+)?)\s+\$?(\d+(?:,\d{3})*(?:\.\d+)?)\s+\$?(\d+(?:,\d{3})*(?:\.\d+)?)$"
    ).unwrap();
}
