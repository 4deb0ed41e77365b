//! Clap argument types and their translation into library types.

use clap::Parser;
use std::path::PathBuf;

use sysctl_apply::orchestrator::SourceSelection;
use sysctl_apply::prefix::PrefixSet;

/// Applies kernel sysctl settings.
#[derive(Parser, Debug)]
#[command(
    name = sysctl_apply::constants::APP_NAME,
    version = sysctl_apply::constants::VERSION,
    about = "Applies kernel sysctl settings from sysctl.d configuration files.",
)]
pub struct Cli {
    /// Path(s) to listing(s) of sysctl settings to apply. When omitted,
    /// `*.conf` files are discovered in the standard sysctl.d directories.
    #[arg(value_name = "CONFIGURATION_FILE")]
    pub files: Vec<PathBuf>,

    /// Only apply rules with the specified path prefix(es).
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Vec<String>,

    /// Show the configuration files that would be loaded and exit.
    #[arg(long, default_value_t = false)]
    pub cat_config: bool,

    /// Fail on permission, read-only and unknown-key errors as well.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print a JSON report of every key to stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Log every file parsed and every key written.
    #[arg(long, short = 'v', default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors and skip the summary.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Prefix filter built from `--prefix` arguments.
    pub fn prefixes(&self) -> PrefixSet {
        PrefixSet::from_args(&self.prefix)
    }

    /// Explicit files if given, otherwise discovery under `conf_dirs`.
    pub fn selection(&self, conf_dirs: Vec<PathBuf>) -> SourceSelection {
        SourceSelection::from_args(self.files.clone(), conf_dirs)
    }

    /// Log filter, with `-v`/`-q` overriding the configured one.
    pub fn log_filter(&self, configured: &str) -> String {
        if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else {
            configured.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_name_is_app_name() {
        assert_eq!(Cli::command().get_name(), sysctl_apply::constants::APP_NAME);
    }

    #[test]
    fn positional_files_and_repeated_prefixes() {
        let cli = Cli::try_parse_from([
            "sysctl-apply",
            "--prefix",
            "net.ipv4",
            "--prefix=/proc/sys/kernel",
            "a.conf",
            "b.conf",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.conf"), PathBuf::from("b.conf")]);
        let prefixes: Vec<_> = cli.prefixes().iter().map(str::to_string).collect();
        assert_eq!(prefixes, vec!["/proc/sys/net/ipv4", "/proc/sys/kernel"]);
        assert_eq!(
            cli.selection(vec![]),
            SourceSelection::Explicit(vec!["a.conf".into(), "b.conf".into()])
        );
    }

    #[test]
    fn no_files_means_discovery() {
        let cli = Cli::try_parse_from(["sysctl-apply"]).unwrap();
        assert!(cli.prefixes().is_empty());
        assert_eq!(
            cli.selection(vec!["/etc/sysctl.d".into()]),
            SourceSelection::Discover(vec!["/etc/sysctl.d".into()])
        );
    }

    #[test]
    fn verbosity_overrides_configured_filter() {
        let cli = Cli::try_parse_from(["sysctl-apply", "-v"]).unwrap();
        assert_eq!(cli.log_filter("info"), "debug");
        let cli = Cli::try_parse_from(["sysctl-apply", "--quiet"]).unwrap();
        assert_eq!(cli.log_filter("info"), "error");
        let cli = Cli::try_parse_from(["sysctl-apply"]).unwrap();
        assert_eq!(cli.log_filter("warn"), "warn");
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["sysctl-apply", "-v", "-q"]).is_err());
    }
}
