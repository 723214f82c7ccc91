//! Main diff engine that orchestrates the entire diff process

use crate::algorithm::{DiffAlgorithm, GreedyAlgorithm};
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::error::{DiffError, Result, Side};
use crate::pipeline::TextPipeline;
use crate::report::DiffReport;
use crate::statistics::DiffStats;
use crate::tokenizers::Token;

/// The main diff engine
pub struct DiffEngine {
    config: DiffConfig,
    pipeline: TextPipeline,
    algorithm: Box<dyn DiffAlgorithm>,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        let pipeline = TextPipeline::from_options(&config.options);
        Self {
            config,
            pipeline,
            algorithm: Box::new(GreedyAlgorithm::new()),
        }
    }

    /// Create a diff engine with the default configuration
    pub fn default_config() -> Self {
        Self::new(DiffConfig::default())
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the diff between two strings
    ///
    /// 1. Reject inputs over the configured length limit
    /// 2. Normalize both inputs (case folding, whitespace)
    /// 3. Tokenize at the configured granularity
    /// 4. Align the token sequences
    /// 5. Count the resulting segments
    pub fn diff(&self, left: &str, right: &str) -> Result<(DiffResult, DiffStats)> {
        self.check_length(Side::Left, left)?;
        self.check_length(Side::Right, right)?;

        let (left_tokens, right_tokens) = self.normalize_and_tokenize(left, right);

        let segments = self.algorithm.compute(&left_tokens, &right_tokens);
        let stats = DiffStats::from_segments(&segments);

        tracing::debug!(
            granularity = %self.config.options.granularity,
            algorithm = self.algorithm.name(),
            left_tokens = left_tokens.len(),
            right_tokens = right_tokens.len(),
            additions = stats.additions,
            deletions = stats.deletions,
            unchanged = stats.unchanged,
            "computed diff"
        );

        Ok((DiffResult::new(segments), stats))
    }

    /// Compute the diff and wrap it in an export report
    pub fn report(&self, left: &str, right: &str) -> Result<DiffReport> {
        let (result, stats) = self.diff(left, right)?;
        Ok(DiffReport::new(&result, stats, self.config.options))
    }

    fn check_length(&self, side: Side, input: &str) -> Result<()> {
        let Some(limit) = self.config.max_input_len else {
            return Ok(());
        };

        // byte length bounds char count from above
        if input.len() <= limit {
            return Ok(());
        }

        let len = input.chars().count();
        if len > limit {
            tracing::warn!(%side, len, limit, "rejecting oversized diff input");
            return Err(DiffError::InputTooLarge { side, len, limit });
        }

        Ok(())
    }

    /// Normalize and tokenize both input strings
    fn normalize_and_tokenize(&self, left: &str, right: &str) -> (Vec<Token>, Vec<Token>) {
        let (left, right) = self.pipeline.process_pair(left, right);
        let tokenizer = self.config.options.granularity.tokenizer();

        (tokenizer.tokenize(&left), tokenizer.tokenize(&right))
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
