// file: src/resource/mod.rs
// version: 1.0.0
// guid: 428da5fd-56eb-406e-94d0-7dd966062783

//! Resource state reconciliation and reporting

pub mod manager;
pub mod result;

pub use manager::ResourceManager;
pub use result::ModuleResult;
