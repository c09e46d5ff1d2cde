//! QAnalyzer backend — QA domain collections with a soft-delete action history.
//!
//! This library crate exposes all modules for use by the RPC binary and
//! integration tests.

pub mod app;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
