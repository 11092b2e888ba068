//! Error types for wp2middleman

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Malformed export document at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("Markup conversion failed: {0}")]
    Conversion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Xml { .. } => 3,
            Error::InputNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            Error::InputNotFound(path) => {
                format!(
                    "Input file not found: {}\n\n\
                    Suggestions:\n\
                    • Export your site from WordPress (Tools → Export → All content)\n\
                    • Pass the export location with --input <FILE>\n\
                    • Set 'input' in wp2middleman.toml",
                    path.display()
                )
            }
            Error::Xml { position, message } => {
                format!(
                    "Malformed export document at byte {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the file is a complete WordPress WXR export\n\
                    • Re-export if the download was interrupted",
                    position, message
                )
            }
            Error::Config(msg) if msg.contains("config file") => {
                format!(
                    "{}\n\n\
                    Valid keys: input, output_dir, original_domain,\n\
                    separate_categories_from_tags, convert_from_html, timezone_label",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using the crate error
pub type Result<T> = std::result::Result<T, Error>;
