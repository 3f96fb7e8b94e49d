// file: src/cli/mod.rs
// version: 1.0.0
// guid: 9f9c240d-72ed-4156-92c1-73af508db9ec

//! Command line interface for the pcs resource agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
