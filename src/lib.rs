// file: src/lib.rs
// version: 1.0.0
// guid: 09165d7f-c5cc-4da7-8def-7c5a43a535cb

//! # pcs resource agent
//!
//! Creates, updates, deletes, relocates and queries Pacemaker cluster
//! resources by driving the `pcs` command-line tool, and turns the
//! indentation-nested text of `pcs resource config` into a structured tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pcs;
pub mod resource;
pub mod runner;

pub use error::{AgentError, ParseError, Result};
pub use parser::{parse, ResourceTree, Section};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
