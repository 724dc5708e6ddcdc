//! Rule-based field extractors for invoice text.
//!
//! The parser applies these as an ordered cascade of independent
//! heuristics; each rule either recovers its field or yields nothing.

pub mod amounts;
pub mod dates;
pub mod line_items;
pub mod number;
pub mod patterns;
pub mod vendor;

pub use amounts::{TotalAmountRule, parse_amount};
pub use dates::DateRule;
pub use line_items::extract_line_items;
pub use number::InvoiceNumberRule;
pub use vendor::VendorRule;

/// A named, independently-testable extraction rule.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Rule name, for logging.
    fn name(&self) -> &'static str;

    /// Apply the rule to the text. `None` means "nothing found", which is
    /// never an error on its own.
    fn apply(&self, text: &str) -> Option<Self::Output>;
}
