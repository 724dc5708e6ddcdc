//! Invoice field parsing.
//!
//! Text goes in, structured [`InvoiceData`](crate::models::invoice::InvoiceData)
//! comes out. The heavy lifting lives in [`rules`], one independent rule per
//! field; [`parser`] composes them and enforces the essential-field gate.

pub mod parser;
pub mod rules;

pub use parser::{HeuristicInvoiceParser, InvoiceParser, parse_invoice_data};
