//! Title to filename sanitization

use regex::Regex;
use std::sync::OnceLock;

fn disallowed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\w\s_-]+").unwrap())
}

/// Whitespace hanging off a line edge or a word boundary
fn boundary_whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)(^|\b\s)\s+($|\s?\b)").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Uppercase letters with no lowercase mapping, e.g. `𝐀` or `ϒ`
fn uppercase_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\p{Uppercase}+").unwrap())
}

/// Turn a post title into a filename fragment.
///
/// Drops everything but word characters, whitespace, `_` and `-`, trims
/// whitespace runs at boundaries, joins words with `_` and lowercases.
/// Word characters are Unicode-aware, so non-Latin titles keep their letters.
/// Uppercase letters that survive lowercasing are dropped.
pub fn sanitize_filename(title: &str) -> String {
    let cleaned = disallowed_regex().replace_all(title, "");
    let trimmed = boundary_whitespace_regex().replace_all(&cleaned, "${1}${2}");
    let lowered = whitespace_regex()
        .replace_all(&trimmed, "_")
        .to_lowercase();
    uppercase_regex().replace_all(&lowered, "").into_owned()
}
