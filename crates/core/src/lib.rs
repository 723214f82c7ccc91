//! # TextDiff Core
//!
//! Greedy text diffing at character, word or line granularity, with optional
//! case and whitespace normalization.
//!
//! ## Core Concepts
//!
//! - **Normalizers**: Transform text before comparison (lowercase, whitespace)
//! - **Pipelines**: Chain normalizers in a fixed order
//! - **Tokenizers**: Split normalized text into tokens; each token carries the
//!   separator used to render it
//! - **Algorithm**: Two-pointer greedy alignment over token sequences
//! - **DiffEngine**: Ties the pieces together and counts the result
//!
//! The alignment is a local nearest-match heuristic, not a minimal edit
//! script. Its output is deterministic, so identical inputs and options
//! always produce identical segments.
//!
//! ## Example
//!
//! ```rust
//! use textdiff_core::{compute_diff, DiffConfig, DiffTag, Granularity};
//!
//! let config = DiffConfig::default()
//!     .with_granularity(Granularity::Word)
//!     .with_ignore_case(true);
//!
//! let (result, stats) = compute_diff("Hello World", "hello there world", Some(config)).unwrap();
//! assert_eq!(stats.additions, 1);
//! assert_eq!(result.segments[1].tag, DiffTag::Added);
//! ```

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod normalizers;
pub mod pipeline;
pub mod report;
pub mod statistics;
pub mod tokenizers;

// Re-export main types
pub use config::{DiffConfig, DiffOptions, Granularity, DEFAULT_MAX_INPUT_LEN};
pub use diff::{DiffResult, DiffSegment, DiffTag};
pub use engine::DiffEngine;
pub use error::{DiffError, Result, Side};
pub use pipeline::TextPipeline;
pub use report::{render_patch, DiffReport};
pub use statistics::DiffStats;
pub use tokenizers::Token;

/// Main entry point for computing diffs between two strings
///
/// # Arguments
///
/// * `left` - The original text
/// * `right` - The modified text
/// * `config` - Optional configuration (uses default if None)
///
/// # Returns
///
/// The ordered segments and their counts, or an error if an input exceeds
/// the configured length limit.
///
/// # Example
///
/// ```rust
/// use textdiff_core::compute_diff;
///
/// let (result, stats) = compute_diff("cat", "cot", None).unwrap();
/// assert_eq!(result.len(), 4);
/// assert_eq!(stats.unchanged, 2);
/// ```
pub fn compute_diff(
    left: &str,
    right: &str,
    config: Option<DiffConfig>,
) -> Result<(DiffResult, DiffStats)> {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.diff(left, right)
}
