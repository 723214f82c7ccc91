//! Diff result types and structures

use crate::error::Result;
use crate::tokenizers::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag carried by every segment of a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    /// Present in both inputs
    Equal,
    /// Present only in the right input
    Added,
    /// Present only in the left input
    Removed,
}

impl DiffTag {
    /// Prefix used in the plain-text report
    pub fn prefix(&self) -> &'static str {
        match self {
            DiffTag::Equal => "  ",
            DiffTag::Added => "+ ",
            DiffTag::Removed => "- ",
        }
    }
}

/// One token's worth of diff output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Token text
    pub value: String,

    /// Separator that follows the token when rendered
    #[serde(default)]
    pub separator: String,

    pub tag: DiffTag,
}

impl DiffSegment {
    pub fn new(tag: DiffTag, value: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            separator: separator.into(),
            tag,
        }
    }

    pub fn equal(token: &Token) -> Self {
        Self::new(DiffTag::Equal, token.text.clone(), token.separator)
    }

    pub fn added(token: &Token) -> Self {
        Self::new(DiffTag::Added, token.text.clone(), token.separator)
    }

    pub fn removed(token: &Token) -> Self {
        Self::new(DiffTag::Removed, token.text.clone(), token.separator)
    }

    /// The value followed by its separator, as displayed
    pub fn rendered(&self) -> String {
        format!("{}{}", self.value, self.separator)
    }

    /// Whether this segment belongs to the left input
    pub fn in_left(&self) -> bool {
        matches!(self.tag, DiffTag::Equal | DiffTag::Removed)
    }

    /// Whether this segment belongs to the right input
    pub fn in_right(&self) -> bool {
        matches!(self.tag, DiffTag::Equal | DiffTag::Added)
    }
}

/// Ordered list of segments covering both inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffResult {
    pub segments: Vec<DiffSegment>,
}

impl DiffResult {
    pub fn new(segments: Vec<DiffSegment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffSegment> {
        self.segments.iter()
    }

    /// True when no segment is Added or Removed
    pub fn is_identical(&self) -> bool {
        self.segments.iter().all(|s| s.tag == DiffTag::Equal)
    }

    /// Get only the changed segments (exclude Equal)
    pub fn changed_segments(&self) -> Vec<&DiffSegment> {
        self.segments
            .iter()
            .filter(|s| s.tag != DiffTag::Equal)
            .collect()
    }

    /// Rebuild the left token stream from Equal and Removed segments
    ///
    /// Each segment's own separator goes between it and the next one, none
    /// after the last.
    pub fn left_text(&self) -> String {
        join_values(self.segments.iter().filter(|s| s.in_left()))
    }

    /// Rebuild the right token stream from Equal and Added segments
    pub fn right_text(&self) -> String {
        join_values(self.segments.iter().filter(|s| s.in_right()))
    }

    /// Serialize the segment list to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a segment list previously produced by [`DiffResult::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn join_values<'a>(segments: impl Iterator<Item = &'a DiffSegment>) -> String {
    let mut out = String::new();
    let mut pending = "";
    for segment in segments {
        out.push_str(pending);
        out.push_str(&segment.value);
        pending = &segment.separator;
    }
    out
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffSegment;
    type IntoIter = std::slice::Iter<'a, DiffSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}{}", segment.tag.prefix(), segment.rendered())?;
        }
        Ok(())
    }
}
