//! HTML to Markdown conversion backed by `html2md`

use crate::domain::markup::{ConvertOptions, MarkupConverter, UnknownTags};
use crate::error::{Error, Result};
use regex::{Captures, Regex};
use std::panic;
use std::sync::OnceLock;

/// Tags html2md has a handler for
const KNOWN_TAGS: &[&str] = &[
    "a", "b", "i", "strong", "em", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "code", "img",
    "ol", "ul", "menu", "li", "p", "br", "hr", "q", "cite", "blockquote", "div", "section",
    "header", "footer", "iframe", "html", "head", "body",
];

/// Tags only expressible in GitHub-flavored Markdown
const GFM_TAGS: &[&str] = &["table", "thead", "tbody", "tr", "th", "td", "s", "del"];

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"</?([A-Za-z][A-Za-z0-9-]*)\b[^>]*>").unwrap())
}

fn placeholder(index: usize) -> String {
    format!("PASSTHRU{}TAG", index)
}

/// [`MarkupConverter`] built on `html2md::parse_html`
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Html2MdConverter {
    pub fn new() -> Self {
        Html2MdConverter
    }

    fn is_supported(name: &str, options: &ConvertOptions) -> bool {
        let name = name.to_ascii_lowercase();
        KNOWN_TAGS.contains(&name.as_str())
            || (options.github_flavored && GFM_TAGS.contains(&name.as_str()))
    }

    /// Replace unsupported tags according to the unknown-tag policy.
    /// Returns the rewritten HTML and the shielded tags, indexed by placeholder.
    fn shield_unknown_tags(html: &str, options: &ConvertOptions) -> (String, Vec<String>) {
        let mut shielded = Vec::new();
        let rewritten = tag_regex().replace_all(html, |caps: &Captures| {
            let tag = &caps[0];
            if Self::is_supported(&caps[1], options) {
                return tag.to_string();
            }
            match options.unknown_tags {
                UnknownTags::PassThrough => {
                    shielded.push(tag.to_string());
                    placeholder(shielded.len() - 1)
                }
                UnknownTags::Drop => String::new(),
            }
        });
        (rewritten.into_owned(), shielded)
    }

    fn restore(markdown: String, shielded: &[String]) -> String {
        // Highest index first so PASSTHRU1TAG never eats part of PASSTHRU12TAG's restore
        shielded
            .iter()
            .enumerate()
            .rev()
            .fold(markdown, |acc, (index, tag)| {
                acc.replace(&placeholder(index), tag)
            })
    }
}

impl MarkupConverter for Html2MdConverter {
    fn convert(&self, html: &str, options: &ConvertOptions) -> Result<String> {
        let (prepared, shielded) = Self::shield_unknown_tags(html, options);

        let markdown = panic::catch_unwind(|| html2md::parse_html(&prepared))
            .map_err(|_| Error::Conversion("html2md failed on post body".to_string()))?;

        Ok(Self::restore(markdown, &shielded))
    }
}
