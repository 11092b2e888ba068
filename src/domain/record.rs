//! Post records extracted from an export document

use chrono::NaiveDateTime;

/// Formats accepted for `wp:post_date`, tried in order
const POST_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A category or tag attached to a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    /// Taxonomy domain attribute ("category", "post_tag", ...)
    pub domain: String,
    /// URL-safe label name
    pub nicename: String,
}

impl CategoryLabel {
    pub fn new(domain: impl Into<String>, nicename: impl Into<String>) -> Self {
        CategoryLabel {
            domain: domain.into(),
            nicename: nicename.into(),
        }
    }
}

/// One post as found in the export. Fields missing from the document are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    pub slug: Option<String>,
    pub display_title: Option<String>,
    pub publish_timestamp: Option<NaiveDateTime>,
    pub author_name: Option<String>,
    pub categories: Vec<CategoryLabel>,
    pub body_markup: Option<String>,
}

impl SourceRecord {
    /// Names of the fields an output document cannot be built without
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.slug.is_none() {
            missing.push("slug");
        }
        if self.display_title.is_none() {
            missing.push("title");
        }
        if self.publish_timestamp.is_none() {
            missing.push("post_date");
        }
        if self.body_markup.is_none() {
            missing.push("content");
        }
        missing
    }
}

/// Normalize a `wp:post_name` value into a slug
pub fn normalize_slug(post_name: &str) -> String {
    post_name.replace(':', "-")
}

/// Parse a `wp:post_date` value. Returns `None` for anything unparseable,
/// including the `0000-00-00 00:00:00` WordPress uses for drafts.
pub fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    POST_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Render a timestamp as `YYYY-MM-DD HH:MM <label>`
pub fn render_timestamp(timestamp: &NaiveDateTime, timezone_label: &str) -> String {
    format!("{} {}", timestamp.format("%Y-%m-%d %H:%M"), timezone_label)
}
