//! CLI subcommands.

pub mod calculate;
pub mod config;
pub mod parse;
