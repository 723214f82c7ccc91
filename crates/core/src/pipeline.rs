//! Text normalization pipeline
//!
//! Chains normalizers in order. The engine builds one from [`DiffOptions`]
//! and runs both inputs through it before tokenizing.

use crate::config::DiffOptions;
use crate::normalizers::{Lowercase, Normalizer, WhitespaceNormalizer};

/// A pipeline of text normalizers applied in insertion order
#[derive(Default, Clone)]
pub struct TextPipeline {
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl TextPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Build the preprocessing pipeline for a set of diff options.
    ///
    /// Case folding runs before whitespace collapsing.
    pub fn from_options(options: &DiffOptions) -> Self {
        let mut pipeline = Self::new();

        if options.ignore_case {
            pipeline = pipeline.add_normalizer(Box::new(Lowercase));
        }

        if options.ignore_whitespace {
            pipeline = pipeline.add_normalizer(Box::new(WhitespaceNormalizer::new()));
        }

        pipeline
    }

    /// Add a normalizer to the pipeline
    pub fn add_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Process text through the entire pipeline, returning the final text
    pub fn process(&self, input: &str) -> String {
        let mut current = input.to_string();

        for normalizer in &self.normalizers {
            tracing::trace!(
                normalizer = normalizer.name(),
                metadata = ?normalizer.metadata(),
                "applying normalizer"
            );
            current = normalizer.normalize(&current);
        }

        current
    }

    /// Process both sides of a comparison
    pub fn process_pair(&self, left: &str, right: &str) -> (String, String) {
        (self.process(left), self.process(right))
    }

    /// Get the number of normalizers in the pipeline
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }

    /// Get the names of all normalizers in the pipeline
    pub fn normalizer_names(&self) -> Vec<String> {
        self.normalizers
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    }
}
