//! Aggregate counts over a diff

use crate::diff::{DiffResult, DiffSegment, DiffTag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Segment counts for a diff.
///
/// `modifications` is never incremented: the aligner emits substitutions as
/// a Removed/Added pair. The field stays for callers that display it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Count segments in a single forward pass
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut stats = Self::default();

        for segment in segments {
            match segment.tag {
                DiffTag::Added => stats.additions += 1,
                DiffTag::Removed => stats.deletions += 1,
                DiffTag::Equal => stats.unchanged += 1,
            }
        }

        stats
    }

    pub fn from_result(result: &DiffResult) -> Self {
        Self::from_segments(&result.segments)
    }

    /// Total number of segments counted
    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.modifications + self.unchanged
    }

    /// Number of non-Equal segments
    pub fn changes(&self) -> usize {
        self.additions + self.deletions + self.modifications
    }

    pub fn has_changes(&self) -> bool {
        self.changes() > 0
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} additions, {} deletions, {} modifications, {} unchanged",
            self.additions, self.deletions, self.modifications, self.unchanged
        )
    }
}
