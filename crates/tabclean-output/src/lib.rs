//! Output generation for cleaned tables.
//!
//! Two independent renderers work over the same [`Table`](tabclean_model::Table):
//! an RFC 4180 CSV file and a SQL script with `CREATE TABLE` and `INSERT`
//! statements. Rendering is pure; writing happens once per file.

mod common;
mod csv_file;
mod error;
mod sql;

pub use csv_file::{render_csv, write_csv};
pub use common::write_output;
pub use error::{OutputError, Result};
pub use sql::{
    SqlDialect, SqlOptions, column_definition, quote_identifier, quote_literal, render_sql,
    write_sql,
};
