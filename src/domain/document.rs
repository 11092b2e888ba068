//! Output document composition

use crate::domain::filename::sanitize_filename;
use crate::domain::record::{render_timestamp, SourceRecord};
use crate::domain::taxonomy::Taxonomy;

/// Line delimiting the header block
const HEADER_DELIMITER: &str = "---";

/// Settings that affect how a document is composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    pub separate_categories_from_tags: bool,
    pub timezone_label: String,
}

/// A Markdown post ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Ordered `key: value` header fields
    pub header: Vec<(String, String)>,
    pub body: String,
    /// `<YYYY-MM-DD>-<sanitized title>.md`
    pub file_name: String,
}

impl OutputDocument {
    /// Build the document for a record, or `None` when slug, title, date or
    /// body is missing. Such records are skipped without an error: the
    /// export routinely contains drafts and attachments with holes in them.
    pub fn compose(
        record: &SourceRecord,
        taxonomy: &Taxonomy,
        body: Option<String>,
        options: &ComposeOptions,
    ) -> Option<Self> {
        record.slug.as_ref()?;
        let title = record.display_title.as_ref()?;
        let timestamp = record.publish_timestamp.as_ref()?;
        let body = body?;

        let mut header = vec![
            ("title".to_string(), title.clone()),
            (
                "date".to_string(),
                render_timestamp(timestamp, &options.timezone_label),
            ),
            (
                "authors".to_string(),
                record.author_name.clone().unwrap_or_default(),
            ),
            ("tags".to_string(), taxonomy.tags_line.clone()),
        ];
        if options.separate_categories_from_tags && !taxonomy.categories_line.is_empty() {
            header.push(("categories".to_string(), taxonomy.categories_line.clone()));
        }

        let file_name = format!(
            "{}-{}.md",
            timestamp.format("%Y-%m-%d"),
            sanitize_filename(title)
        );

        Some(OutputDocument {
            header,
            body,
            file_name,
        })
    }

    /// Look up a header value by key
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render the file contents. The body is written verbatim, no newline is appended.
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(HEADER_DELIMITER);
        output.push('\n');
        for (key, value) in &self.header {
            output.push_str(&format!("{}: {}\n", key, value));
        }
        output.push_str(HEADER_DELIMITER);
        output.push('\n');
        output.push_str(&self.body);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::CategoryLabel;
    use crate::domain::taxonomy::split_taxonomy;
    use chrono::NaiveDate;

    fn options(separate: bool) -> ComposeOptions {
        ComposeOptions {
            separate_categories_from_tags: separate,
            timezone_label: "JST".to_string(),
        }
    }

    fn hello_world() -> SourceRecord {
        SourceRecord {
            slug: Some("hello-world".to_string()),
            display_title: Some("Hello, World!".to_string()),
            publish_timestamp: NaiveDate::from_ymd_opt(2020, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0),
            author_name: Some("Jane".to_string()),
            categories: vec![],
            body_markup: Some("<p>Hi</p>".to_string()),
        }
    }

    #[test]
    fn test_compose_hello_world() {
        let record = hello_world();
        let doc = OutputDocument::compose(
            &record,
            &Taxonomy::default(),
            Some("Hi".to_string()),
            &options(false),
        )
        .unwrap();

        assert_eq!(doc.file_name, "2020-03-01-hello_world.md");
        assert_eq!(
            doc.render(),
            "---\ntitle: Hello, World!\ndate: 2020-03-01 10:00 JST\nauthors: Jane\ntags: \n---\nHi"
        );
    }

    #[test]
    fn test_compose_skips_incomplete_records() {
        let taxonomy = Taxonomy::default();
        let body = || Some("body".to_string());

        let mut record = hello_world();
        record.slug = None;
        assert!(OutputDocument::compose(&record, &taxonomy, body(), &options(false)).is_none());

        let mut record = hello_world();
        record.display_title = None;
        assert!(OutputDocument::compose(&record, &taxonomy, body(), &options(false)).is_none());

        let mut record = hello_world();
        record.publish_timestamp = None;
        assert!(OutputDocument::compose(&record, &taxonomy, body(), &options(false)).is_none());

        let record = hello_world();
        assert!(OutputDocument::compose(&record, &taxonomy, None, &options(false)).is_none());
    }

    #[test]
    fn test_missing_author_does_not_block() {
        let mut record = hello_world();
        record.author_name = None;
        let doc = OutputDocument::compose(
            &record,
            &Taxonomy::default(),
            Some(String::new()),
            &options(false),
        )
        .unwrap();
        assert_eq!(doc.header_value("authors"), Some(""));
    }

    #[test]
    fn test_categories_line_only_when_separated() {
        let mut record = hello_world();
        record.categories = vec![
            CategoryLabel::new("category", "News"),
            CategoryLabel::new("post_tag", "rust"),
        ];

        let joined = split_taxonomy(&record.categories, false);
        let doc =
            OutputDocument::compose(&record, &joined, Some("x".to_string()), &options(false))
                .unwrap();
        assert_eq!(doc.header_value("categories"), None);
        assert_eq!(doc.header_value("tags"), Some("News, rust, "));
        assert!(!doc.render().contains("categories:"));

        let split = split_taxonomy(&record.categories, true);
        let doc = OutputDocument::compose(&record, &split, Some("x".to_string()), &options(true))
            .unwrap();
        assert_eq!(doc.header_value("categories"), Some("News, "));
        assert_eq!(doc.header_value("tags"), Some("rust, "));
        assert!(doc
            .render()
            .contains("tags: rust, \ncategories: News, \n---\n"));
    }

    #[test]
    fn test_empty_categories_line_omitted_when_separated() {
        let mut record = hello_world();
        record.categories = vec![CategoryLabel::new("post_tag", "rust")];
        let taxonomy = split_taxonomy(&record.categories, true);
        let doc =
            OutputDocument::compose(&record, &taxonomy, Some("x".to_string()), &options(true))
                .unwrap();
        assert_eq!(doc.header_value("categories"), None);
    }

    #[test]
    fn test_header_order() {
        let mut record = hello_world();
        record.categories = vec![CategoryLabel::new("category", "News")];
        let taxonomy = split_taxonomy(&record.categories, true);
        let doc =
            OutputDocument::compose(&record, &taxonomy, Some("x".to_string()), &options(true))
                .unwrap();
        let keys: Vec<&str> = doc.header.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "date", "authors", "tags", "categories"]);
    }

    #[test]
    fn test_render_keeps_body_verbatim() {
        let doc = OutputDocument {
            header: vec![("title".to_string(), "T".to_string())],
            body: "line one\n\nline two\n".to_string(),
            file_name: "x.md".to_string(),
        };
        assert_eq!(doc.render(), "---\ntitle: T\n---\nline one\n\nline two\n");
    }
}
