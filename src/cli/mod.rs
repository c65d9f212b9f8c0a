// src/cli/mod.rs
//! CLI argument parsing and handlers.

pub mod args;
pub mod handlers;
pub mod logging;

pub use args::Cli;
