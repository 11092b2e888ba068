//! Domain layer - Records, taxonomy, body and document rules

pub mod body;
pub mod document;
pub mod filename;
pub mod markup;
pub mod record;
pub mod taxonomy;

pub use body::BodyTransformer;
pub use document::{ComposeOptions, OutputDocument};
pub use filename::sanitize_filename;
pub use markup::{ConvertOptions, MarkupConverter, UnknownTags};
pub use record::{CategoryLabel, SourceRecord};
pub use taxonomy::{split_taxonomy, Taxonomy};
