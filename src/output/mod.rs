//! Output renderers: terminal summary, JSON, and `--cat-config` listing.

pub mod cat;
pub mod json;
pub mod terminal;

use crate::orchestrator::RunReport;

/// Trait for rendering a finished run.
pub trait ReportRenderer {
    /// Render the report to a string.
    fn render(&self, report: &RunReport) -> String;
}
