//! Configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "wp2middleman.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// WordPress XML export to read
    pub input: PathBuf,
    /// Directory the Markdown posts are written to
    pub output_dir: PathBuf,
    /// Address of the original site. Carried along for link rewriting; the
    /// conversion itself does not read it.
    pub original_domain: String,
    pub separate_categories_from_tags: bool,
    pub convert_from_html: bool,
    /// Label appended to rendered post dates
    pub timezone_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("wordpress.xml"),
            output_dir: PathBuf::from("export").join("_posts"),
            original_domain: "http://tech.feedforce.jp".to_string(),
            separate_categories_from_tags: false,
            convert_from_html: true,
            timezone_label: "JST".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("config file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Load the config for a run started in `dir`.
    ///
    /// An explicit path must exist. Without one, `wp2middleman.toml` in `dir`
    /// is used when present and the defaults otherwise.
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(&dir.join(path)),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::load_from_file(&candidate)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Resolve relative input and output paths against `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.input.is_relative() {
            self.input = base.join(&self.input);
        }
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }
}
