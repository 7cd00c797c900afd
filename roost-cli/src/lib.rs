//! Library exports for roost-cli.
//!
//! The command tree is exported so that completions and integration tests
//! can reach it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
