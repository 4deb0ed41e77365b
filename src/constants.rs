//! App-wide constants.
//!
//! Centralises the tool name, kernel paths, configuration directories and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "sysctl-apply";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical root of the kernel settings namespace.
pub const PROC_SYS_ROOT: &str = "/proc/sys/";

/// Suffix a file must carry to be picked up from a configuration directory.
pub const CONF_SUFFIX: &str = ".conf";

/// Device a configuration file may be symlinked to in order to mask it.
pub const MASK_TARGET: &str = "/dev/null";

/// Standard configuration directories in ascending precedence: a file in a
/// later directory replaces a same-named file in an earlier one.
pub const CONF_DIRS: &[&str] = &[
    "/usr/lib/sysctl.d",
    "/usr/local/lib/sysctl.d",
    "/run/sysctl.d",
    "/etc/sysctl.d",
];

/// Default log filter when neither the environment nor the CLI sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_CONF_DIRS: &str = "SYSCTL_APPLY_CONF_DIRS";
pub const ENV_PROC_ROOT: &str = "SYSCTL_APPLY_PROC_ROOT";
pub const ENV_LOG: &str = "SYSCTL_APPLY_LOG";
