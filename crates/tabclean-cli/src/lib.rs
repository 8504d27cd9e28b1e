//! Command-line front end for format identification and data cleaning.
//!
//! The `identify` and `clean` binaries share argument parsing, logging setup,
//! command execution and terminal rendering through this library.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
