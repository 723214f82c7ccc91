use crate::algorithm::{build_segments, Alignment, DiffAlgorithm};
use crate::diff::DiffSegment;
use crate::tokenizers::Token;

/// Two-pointer greedy alignment.
///
/// On a mismatch it looks ahead on both sides for the current token of the
/// other side and skips whichever side reaches a match sooner; the left side
/// (a removal) wins ties. When neither token reappears the pair is emitted as
/// a removal followed by an addition. This is a local heuristic, not a
/// minimal edit script, and costs `O(n·m)` in the worst case.
pub struct GreedyAlgorithm;

impl GreedyAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffAlgorithm for GreedyAlgorithm {
    fn compute(&self, original: &[Token], modified: &[Token]) -> Vec<DiffSegment> {
        let alignments = greedy_align(original, modified, |a, b| a.text == b.text);
        build_segments(original, modified, &alignments)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

/// Align two sequences with the greedy nearest-match rule.
///
/// `eq` decides token equality. Every index of `left` appears exactly once
/// in an `Equal` or `Removed` step, every index of `right` exactly once in an
/// `Equal` or `Added` step, both in increasing order.
pub fn greedy_align<T, F>(left: &[T], right: &[T], eq: F) -> Vec<Alignment>
where
    F: Fn(&T, &T) -> bool,
{
    let n = left.len();
    let m = right.len();
    let mut steps = Vec::with_capacity(n.max(m));
    let mut i = 0;
    let mut j = 0;

    while i < n || j < m {
        if i == n {
            steps.push(Alignment::Added(j));
            j += 1;
        } else if j == m {
            steps.push(Alignment::Removed(i));
            i += 1;
        } else if eq(&left[i], &right[j]) {
            steps.push(Alignment::Equal(i, j));
            i += 1;
            j += 1;
        } else {
            let left_next = left[i..].iter().position(|t| eq(t, &right[j]));
            let right_next = right[j..].iter().position(|t| eq(&left[i], t));

            match (left_next, right_next) {
                (Some(l), r) if r.map_or(true, |r| l <= r) => {
                    steps.push(Alignment::Removed(i));
                    i += 1;
                }
                (_, Some(_)) => {
                    steps.push(Alignment::Added(j));
                    j += 1;
                }
                _ => {
                    steps.push(Alignment::Removed(i));
                    steps.push(Alignment::Added(j));
                    i += 1;
                    j += 1;
                }
            }
        }
    }

    steps
}
