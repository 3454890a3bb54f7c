//! `chartransfer` library crate.
//!
//! Re-exports the pipeline and its plumbing for integration testing. The
//! binary entrypoint lives in `main.rs`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod session;
