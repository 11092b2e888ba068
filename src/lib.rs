//! wp2middleman - WordPress export to Markdown converter
//!
//! Reads a WordPress XML export and writes one Markdown post per item, with a
//! `---` header block (title, date, authors, tags) ready for a Middleman site.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::Error;
