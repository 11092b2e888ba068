//! Export conversion use case
//!
//! Streams records out of the export, turns each complete one into a Markdown
//! post and writes it to the output directory.

use crate::domain::{
    split_taxonomy, BodyTransformer, ComposeOptions, MarkupConverter, OutputDocument,
    SourceRecord,
};
use crate::error::Result;
use crate::infrastructure::{
    Config, ExportReader, FileSystemRepository, Html2MdConverter, PostRepository,
};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Outcome of a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    /// Whether the output directory had to be created
    pub created_output_dir: bool,
    /// Files written, in document order
    pub written: Vec<PathBuf>,
    /// Records skipped for missing fields
    pub skipped: usize,
}

/// Progress notifications emitted while a conversion runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The output directory did not exist and was created
    OutputDirCreated(&'a Path),
    /// A post was written to this path
    Written(&'a Path),
}

/// Service converting an export into Markdown posts
pub struct ConvertService {
    config: Config,
    repository: FileSystemRepository,
    converter: Box<dyn MarkupConverter>,
}

impl ConvertService {
    /// Create a service using the html2md converter
    pub fn new(config: Config) -> Self {
        Self::with_converter(config, Box::new(Html2MdConverter::new()))
    }

    /// Create a service with a custom markup converter
    pub fn with_converter(config: Config, converter: Box<dyn MarkupConverter>) -> Self {
        let repository = FileSystemRepository::new(config.output_dir.clone());
        ConvertService {
            config,
            repository,
            converter,
        }
    }

    /// Execute the conversion
    ///
    /// `on_progress` is told when the output directory is created and when
    /// each post has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file is missing or unreadable
    /// - The export is not well-formed XML
    /// - Markup conversion fails
    /// - Writing a post fails
    ///
    /// Files written before the error stay on disk.
    pub fn execute(&self, mut on_progress: impl FnMut(Progress<'_>)) -> Result<ConvertReport> {
        // 1. Open the export before touching the output directory
        let records = ExportReader::from_path(&self.config.input)?;

        // 2. Output directory is checked once per run
        let mut report = ConvertReport {
            created_output_dir: self.repository.prepare()?,
            ..ConvertReport::default()
        };
        if report.created_output_dir {
            on_progress(Progress::OutputDirCreated(self.repository.root()));
        }

        // 3. Convert and write each record
        for record in records {
            let record = record?;
            match self.convert_record(&record)? {
                Some(document) => {
                    let path = self.repository.write_post(&document)?;
                    info!("Wrote {}", path.display());
                    on_progress(Progress::Written(&path));
                    report.written.push(path);
                }
                None => {
                    // Incomplete records are dropped silently, matching the
                    // behavior existing migrations were built against
                    debug!(
                        "Skipping item {:?}: missing {}",
                        record.display_title.as_deref().unwrap_or("<untitled>"),
                        record.missing_required_fields().join(", ")
                    );
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }

    /// Build the output document for one record, or `None` if it must be skipped
    pub fn convert_record(&self, record: &SourceRecord) -> Result<Option<OutputDocument>> {
        let transformer =
            BodyTransformer::new(self.config.convert_from_html, self.converter.as_ref());
        let body = record
            .body_markup
            .as_deref()
            .map(|markup| transformer.transform(markup))
            .transpose()?;

        let taxonomy = split_taxonomy(
            &record.categories,
            self.config.separate_categories_from_tags,
        );
        let options = ComposeOptions {
            separate_categories_from_tags: self.config.separate_categories_from_tags,
            timezone_label: self.config.timezone_label.clone(),
        };

        Ok(OutputDocument::compose(record, &taxonomy, body, &options))
    }
}
