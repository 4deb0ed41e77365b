//! sysctl-apply — apply kernel sysctl settings (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod apply;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod prefix;
pub mod source;
pub mod store;
