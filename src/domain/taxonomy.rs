//! Splitting category labels into tag and category header lines

use crate::domain::record::CategoryLabel;

/// Domain value marking a label as a category rather than a tag.
/// Compared case-sensitively.
pub const CATEGORY_DOMAIN: &str = "category";

/// Separator appended after every label
const LABEL_SEPARATOR: &str = ", ";

/// Comma-separated taxonomy lines for the header block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub tags_line: String,
    pub categories_line: String,
}

/// Build the `tags` and `categories` lines from a record's labels.
///
/// With `separate` off, every label is a tag. Every label is followed by `", "`
/// and the trailing separator is kept: converted sites already rely on that
/// shape, odd as it looks.
pub fn split_taxonomy(labels: &[CategoryLabel], separate: bool) -> Taxonomy {
    let mut taxonomy = Taxonomy::default();

    for label in labels {
        let line = if separate && label.domain == CATEGORY_DOMAIN {
            &mut taxonomy.categories_line
        } else {
            &mut taxonomy.tags_line
        };
        line.push_str(&label.nicename);
        line.push_str(LABEL_SEPARATOR);
    }

    taxonomy
}
