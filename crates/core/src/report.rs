//! Plain-text rendering of a diff for copying or saving to a file

use crate::config::DiffOptions;
use crate::diff::DiffResult;
use crate::statistics::DiffStats;
use std::fmt;

/// Render every segment with its `"+ "`, `"- "` or `"  "` prefix.
///
/// Segments are concatenated directly; word and line segments already end
/// in their separator.
pub fn render_patch(result: &DiffResult) -> String {
    result.to_string()
}

/// Full export report: statistics, the options used, and the patch body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub stats: DiffStats,
    pub options: DiffOptions,
    pub body: String,
}

impl DiffReport {
    pub fn new(result: &DiffResult, stats: DiffStats, options: DiffOptions) -> Self {
        Self {
            stats,
            options,
            body: render_patch(result),
        }
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text Diff Report")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(f, "Statistics:")?;
        writeln!(f, "- Additions: {}", self.stats.additions)?;
        writeln!(f, "- Deletions: {}", self.stats.deletions)?;
        writeln!(f, "- Modifications: {}", self.stats.modifications)?;
        writeln!(f, "- Unchanged: {}", self.stats.unchanged)?;
        writeln!(f)?;
        writeln!(f, "Options:")?;
        writeln!(f, "- Ignore Case: {}", self.options.ignore_case)?;
        writeln!(f, "- Ignore Whitespace: {}", self.options.ignore_whitespace)?;
        writeln!(f, "- Diff Type: {}", self.options.granularity)?;
        writeln!(f)?;
        writeln!(f, "Diff:")?;
        write!(f, "{}", self.body)
    }
}
