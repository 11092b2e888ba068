//! Post body transformation

use crate::domain::markup::{ConvertOptions, MarkupConverter, UnknownTags};
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder standing in for a blank line while the converter runs
pub const BLANK_LINE_SENTINEL: &str = "XXXXXXXXXX";

fn blank_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\r?\n\r?\n").unwrap())
}

/// A newline directly followed by a tag on the next line
fn newline_before_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n(<.+>)").unwrap())
}

fn sentinel_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(XXXXXXXXXX)+").unwrap())
}

fn loose_blank_lines_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Crude HTML detection: a `<` and a `>` anywhere in the text
pub fn looks_like_html(text: &str) -> bool {
    text.contains('<') && text.contains('>')
}

/// Converts post bodies to Markdown around a pluggable [`MarkupConverter`]
pub struct BodyTransformer<'a> {
    convert_from_html: bool,
    converter: &'a dyn MarkupConverter,
}

impl<'a> BodyTransformer<'a> {
    pub fn new(convert_from_html: bool, converter: &'a dyn MarkupConverter) -> Self {
        BodyTransformer {
            convert_from_html,
            converter,
        }
    }

    /// Transform a post body.
    ///
    /// HTML conversion only runs when enabled and the body looks like HTML.
    /// Blank-line runs are always collapsed to a single blank line.
    pub fn transform(&self, body: &str) -> Result<String> {
        let body = if self.convert_from_html && looks_like_html(body) {
            self.convert(body)?
        } else {
            body.to_string()
        };

        Ok(loose_blank_lines_regex()
            .replace_all(&body, "\n\n")
            .into_owned())
    }

    fn convert(&self, body: &str) -> Result<String> {
        // Converters collapse whitespace, so paragraph breaks ride through as sentinels
        let protected = blank_line_regex().replace_all(body, BLANK_LINE_SENTINEL);
        let separated = newline_before_tag_regex().replace_all(&protected, "<br><br>${1}");

        let options = ConvertOptions {
            unknown_tags: UnknownTags::PassThrough,
            github_flavored: true,
        };
        let markdown = self.converter.convert(&separated, &options)?;

        Ok(sentinel_run_regex()
            .replace_all(&markdown, "\n\n")
            .into_owned())
    }
}
