//! Command handlers for hvstats CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod infer;
pub mod name;
