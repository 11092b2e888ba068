//! CLI argument definitions

use crate::infrastructure::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "wp2middleman")]
#[command(about = "Convert a WordPress XML export into Markdown posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: wp2middleman.toml in the current directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// WordPress XML export to read
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory to write posts into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Address of the original site
    #[arg(long, value_name = "URL")]
    pub domain: Option<String>,

    /// Write "category" domain labels to a separate categories line
    #[arg(long, overrides_with = "no_separate_categories")]
    pub separate_categories: bool,

    /// Put every label on the tags line
    #[arg(long, overrides_with = "separate_categories")]
    pub no_separate_categories: bool,

    /// Convert HTML post bodies to Markdown
    #[arg(long, overrides_with = "no_html")]
    pub html: bool,

    /// Keep post bodies as HTML instead of converting to Markdown
    #[arg(long, overrides_with = "html")]
    pub no_html: bool,

    /// Timezone label appended to post dates
    #[arg(long, value_name = "LABEL")]
    pub timezone: Option<String>,
}

impl Cli {
    /// Layer command-line flags over a loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(domain) = &self.domain {
            config.original_domain = domain.clone();
        }
        // Pairs override each other, so at most one side is set
        if self.separate_categories {
            config.separate_categories_from_tags = true;
        } else if self.no_separate_categories {
            config.separate_categories_from_tags = false;
        }
        if self.html {
            config.convert_from_html = true;
        } else if self.no_html {
            config.convert_from_html = false;
        }
        if let Some(timezone) = &self.timezone {
            config.timezone_label = timezone.clone();
        }
        config
    }
}
