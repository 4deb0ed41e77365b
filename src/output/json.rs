//! JSON output renderer.
//!
//! Outputs `{"success": bool, "sources": [...], "load_errors": [...],
//! "outcomes": [...], "summary": {...}}`.

use crate::orchestrator::RunReport;
use crate::output::ReportRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &RunReport) -> String {
        let load_errors: Vec<String> = report.load_errors.iter().map(ToString::to_string).collect();

        let output = serde_json::json!({
            "success": report.is_success(),
            "sources": report.sources,
            "load_errors": load_errors,
            "outcomes": report.run.outcomes(),
            "first_fatal": report.run.first_fatal(),
            "summary": report.run.summary(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplyOutcome, FailureReason, RunResult};

    #[test]
    fn render_json() {
        let mut run = RunResult::new();
        run.record("kernel/sysrq", "1", ApplyOutcome::Applied);
        run.record("vm/bogus", "1", ApplyOutcome::FatalFailure(FailureReason::Other("invalid argument".into())));
        let report = RunReport {
            sources: vec!["/etc/sysctl.d/99.conf".into()],
            load_errors: Vec::new(),
            run,
        };

        let output = JsonRenderer.render(&report);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["outcomes"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["outcomes"][0]["outcome"], "applied");
        assert_eq!(parsed["first_fatal"]["key"], "vm/bogus");
        assert_eq!(parsed["summary"]["applied"], 1);
        assert_eq!(parsed["summary"]["failed"], 1);
        assert_eq!(parsed["sources"][0], "/etc/sysctl.d/99.conf");
    }

    #[test]
    fn render_empty_json() {
        let report = RunReport {
            sources: Vec::new(),
            load_errors: Vec::new(),
            run: RunResult::new(),
        };
        let parsed: serde_json::Value = serde_json::from_str(&JsonRenderer.render(&report)).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["outcomes"].as_array().unwrap().len(), 0);
        assert!(parsed["first_fatal"].is_null());
    }
}
