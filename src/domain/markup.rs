//! Markup conversion seam

use crate::error::Result;

/// What to do with tags the converter has no rule for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTags {
    /// Keep the tag markup verbatim in the output
    #[default]
    PassThrough,
    /// Remove the tag markup, keep its text content
    Drop,
}

/// Options for a single conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub unknown_tags: UnknownTags,
    /// Allow GitHub-flavored constructs (tables, strikethrough)
    pub github_flavored: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            unknown_tags: UnknownTags::PassThrough,
            github_flavored: true,
        }
    }
}

/// Converts a string containing HTML into Markdown
pub trait MarkupConverter {
    fn convert(&self, html: &str, options: &ConvertOptions) -> Result<String>;
}
