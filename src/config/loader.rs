//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. Built-in defaults

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{CONF_DIRS, DEFAULT_LOG_FILTER, ENV_CONF_DIRS, ENV_LOG, ENV_PROC_ROOT, PROC_SYS_ROOT};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must list at least one directory")]
    NoConfDirs { var: &'static str },

    #[error("{var} must be an absolute path, got '{value}'")]
    RelativeProcRoot { var: &'static str, value: String },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Configuration directories in ascending precedence.
    pub conf_dirs: Vec<PathBuf>,
    /// Directory that sysctl keys are resolved against.
    pub proc_root: PathBuf,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conf_dirs: CONF_DIRS.iter().map(PathBuf::from).collect(),
            proc_root: PathBuf::from(PROC_SYS_ROOT),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Built-in defaults overlaid with environment overrides.
    pub fn load(env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_vars(env)?;
        Ok(config)
    }

    fn apply_env_vars(&mut self, env: &Env) -> Result<(), ConfigError> {
        if let Some(val) = env.get(ENV_CONF_DIRS) {
            let dirs: Vec<PathBuf> = val
                .split(':')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .collect();
            if dirs.is_empty() {
                return Err(ConfigError::NoConfDirs { var: ENV_CONF_DIRS });
            }
            self.conf_dirs = dirs;
        }

        match env.get_non_empty(ENV_PROC_ROOT) {
            Some(val) if val.starts_with('/') => self.proc_root = PathBuf::from(val),
            Some(val) => {
                return Err(ConfigError::RelativeProcRoot {
                    var: ENV_PROC_ROOT,
                    value: val,
                });
            }
            None if env.get(ENV_PROC_ROOT).is_some() => {
                eprintln!("Warning: ignoring empty {ENV_PROC_ROOT} value");
            }
            None => {}
        }

        if let Some(val) = env.get_non_empty(ENV_LOG) {
            self.log_filter = val;
        }

        Ok(())
    }
}
