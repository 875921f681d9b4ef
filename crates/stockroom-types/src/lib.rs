//! Foundation types for Stockroom.
//!
//! This crate provides the record type shared by the store and the
//! command-line front end. Every other Stockroom crate depends on
//! `stockroom-types`.
//!
//! # Key Types
//!
//! - [`ShoeRecord`] -- One inventory line: country, code, product, cost, quantity
//! - [`TypeError`] -- Field parsing failures
//! - [`format_decimal`] -- Operator-facing rendering of cost and value figures

pub mod error;
pub mod record;

pub use error::TypeError;
pub use record::{format_decimal, parse_cost, parse_quantity, ShoeRecord, FIELD_COUNT};
