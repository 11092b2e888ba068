//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export_reader;
pub mod html_converter;
pub mod repository;

pub use config::Config;
pub use export_reader::ExportReader;
pub use html_converter::Html2MdConverter;
pub use repository::{FileSystemRepository, PostRepository};
