// file: src/logging/mod.rs
// version: 1.0.0
// guid: db1a2d67-d09f-4013-bf9f-8f123aebc04c

//! Logging system for the pcs resource agent

pub mod logger;

pub use logger::{init_json_logger, init_logger, with_async_operation_span};
