//! Service computation date CLI library.
//!
//! This crate provides the CLI interface for the SCD calculator.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, OpmAction};
pub use config::Config;
