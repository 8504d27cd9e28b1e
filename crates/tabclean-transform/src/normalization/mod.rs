//! Normalization functions for headers and cell values.

pub mod header;
pub mod numeric;
