//! Configuration loading and layering.
//!
//! Resolves configuration directories, the sysctl root and the log filter
//! from built-in defaults and environment variables. CLI flags are merged
//! on top by the binary.

pub mod loader;

pub use loader::{Config, ConfigError};
