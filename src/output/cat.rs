//! `--cat-config`: print the sources that would be loaded, in load order.

use colored::Colorize;

use crate::orchestrator::SourceSelection;
use crate::source::{self, SourceError};

/// Concatenate every resolved source, each preceded by a `# <path>` header.
///
/// Files that vanished after discovery are skipped; a missing explicit file
/// is an error.
pub fn render_cat_config(selection: &SourceSelection) -> Result<String, SourceError> {
    let mut output = String::new();

    for (path, tolerate_missing) in selection.resolve()? {
        let Some(content) = source::read_source(&path, tolerate_missing)? else {
            continue;
        };

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", format!("# {}", path.display()).blue().bold()));
        output.push_str(&content);
        if !content.ends_with('\n') {
            output.push('\n');
        }
    }

    Ok(output)
}
