//! Terminal renderer: failed keys followed by a one-line summary.

use colored::Colorize;

use crate::models::ApplyOutcome;
use crate::orchestrator::RunReport;
use crate::output::ReportRenderer;

/// Human-readable run summary with colors.
pub struct TerminalRenderer;

impl ReportRenderer for TerminalRenderer {
    fn render(&self, report: &RunReport) -> String {
        let mut output = String::new();

        for err in &report.load_errors {
            output.push_str(&format!(" {} {}\n", "✖".red().bold(), err));
        }

        for entry in report.run.outcomes() {
            let line = match &entry.outcome {
                ApplyOutcome::FatalFailure(reason) => format!(
                    " {} {} = {} {}: {}\n",
                    "✖".red().bold(),
                    entry.key.bold(),
                    entry.value,
                    format!("[{}]", reason.as_ref()).dimmed(),
                    reason.to_string().red()
                ),
                ApplyOutcome::TolerableFailure(reason) => format!(
                    " {} {} = {} {}: {}\n",
                    "⚠".yellow().bold(),
                    entry.key.bold(),
                    entry.value,
                    format!("[{}]", reason.as_ref()).dimmed(),
                    reason.to_string().yellow()
                ),
                ApplyOutcome::Applied | ApplyOutcome::SkippedByFilter => continue,
            };
            output.push_str(&line);
        }

        let summary = report.run.summary();
        let status = if report.is_success() {
            "✔".green().bold()
        } else {
            "✖".red().bold()
        };
        output.push_str(&format!(
            " {} {} applied, {} skipped, {} ignored, {} failed ({} files)\n",
            status,
            summary.applied.to_string().green().bold(),
            summary.skipped.to_string().dimmed(),
            summary.tolerated.to_string().yellow().bold(),
            summary.failed.to_string().red().bold(),
            report.sources.len(),
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FailureReason, RunResult};
    use crate::source::SourceError;

    fn report(run: RunResult) -> RunReport {
        RunReport {
            sources: vec!["/etc/sysctl.d/10-net.conf".into()],
            load_errors: Vec::new(),
            run,
        }
    }

    #[test]
    fn render_clean_run() {
        let mut run = RunResult::new();
        run.record("kernel/sysrq", "1", ApplyOutcome::Applied);
        let output = TerminalRenderer.render(&report(run));
        assert!(output.contains("applied"));
        assert!(output.contains("(1 files)"));
        assert!(!output.contains("kernel/sysrq"));
    }

    #[test]
    fn render_lists_failed_keys() {
        let mut run = RunResult::new();
        run.record("net/ipv4/ip_forward", "1", ApplyOutcome::TolerableFailure(FailureReason::ReadOnly));
        run.record("kernel/panic", "x", ApplyOutcome::FatalFailure(FailureReason::Other("invalid argument".into())));
        let output = TerminalRenderer.render(&report(run));
        assert!(output.contains("net/ipv4/ip_forward"));
        assert!(output.contains("read-only file system"));
        assert!(output.contains("[read-only]"));
        assert!(output.contains("[other]"));
        assert!(output.contains("kernel/panic"));
        assert!(output.contains("invalid argument"));
    }

    #[test]
    fn render_load_errors() {
        let mut rep = report(RunResult::new());
        rep.load_errors.push(SourceError::Missing {
            path: "/etc/sysctl.d/gone.conf".into(),
        });
        let output = TerminalRenderer.render(&rep);
        assert!(output.contains("gone.conf"));
    }
}
