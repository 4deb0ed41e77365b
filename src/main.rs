//! sysctl-apply — apply kernel sysctl settings.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::Cli;
use sysctl_apply::apply::ProcSysWriter;
use sysctl_apply::config::Config;
use sysctl_apply::env::Env;
use sysctl_apply::orchestrator::ApplyOrchestrator;
use sysctl_apply::output::cat::render_cat_config;
use sysctl_apply::output::json::JsonRenderer;
use sysctl_apply::output::terminal::TerminalRenderer;
use sysctl_apply::output::ReportRenderer;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&Env::process()).context("failed to load configuration")?;
    cli::init_logging(&cli.log_filter(&config.log_filter));

    let selection = cli.selection(config.conf_dirs.clone());

    if cli.cat_config {
        let listing = render_cat_config(&selection).context("failed to read configuration")?;
        print!("{listing}");
        return Ok(());
    }

    set_umask();

    let orchestrator = ApplyOrchestrator::new(selection, cli.prefixes()).strict(cli.strict);
    let report = orchestrator.run(ProcSysWriter::new(config.proc_root.clone()));

    if cli.json {
        println!("{}", JsonRenderer.render(&report));
    } else if !cli.quiet {
        eprint!("{}", TerminalRenderer.render(&report));
    }

    if !report.is_success() {
        match report.first_error() {
            Some(first) => bail!("{first}"),
            None => bail!("failed to apply sysctl settings"),
        }
    }

    Ok(())
}

fn set_umask() {
    // SAFETY: umask only swaps the process file-creation mask.
    unsafe {
        libc::umask(0o022);
    }
}
