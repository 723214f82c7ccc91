//! Diff algorithms
//!
//! An algorithm turns two token sequences into an ordered list of tagged
//! segments covering every token of both sides.
pub mod greedy;

pub use greedy::{greedy_align, GreedyAlgorithm};

use crate::diff::DiffSegment;
use crate::tokenizers::Token;

/// Trait for diff algorithms
pub trait DiffAlgorithm: Send + Sync {
    /// Compute diff between two token sequences
    fn compute(&self, original: &[Token], modified: &[Token]) -> Vec<DiffSegment>;

    /// Get the name of this algorithm
    fn name(&self) -> &str;
}

/// One step of an alignment, expressed as indices into the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// `left[i]` matches `right[j]`
    Equal(usize, usize),
    /// `left[i]` has no counterpart
    Removed(usize),
    /// `right[j]` has no counterpart
    Added(usize),
}

/// Turn index alignments into segments
pub(crate) fn build_segments(
    original: &[Token],
    modified: &[Token],
    alignments: &[Alignment],
) -> Vec<DiffSegment> {
    alignments
        .iter()
        .map(|step| match *step {
            Alignment::Equal(i, _) => DiffSegment::equal(&original[i]),
            Alignment::Removed(i) => DiffSegment::removed(&original[i]),
            Alignment::Added(j) => DiffSegment::added(&modified[j]),
        })
        .collect()
}
