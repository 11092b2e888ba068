//! File system repository for converted posts

use crate::domain::OutputDocument;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract destination for converted posts
pub trait PostRepository {
    /// Get the output directory of this repository
    fn root(&self) -> &Path;

    /// Create the output directory if needed. Returns true when it was created.
    fn prepare(&self) -> Result<bool>;

    /// Write a post, replacing any existing file with the same name
    fn write_post(&self, document: &OutputDocument) -> Result<PathBuf>;
}

/// File system implementation of PostRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository writing into the given directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }
}

impl PostRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn prepare(&self) -> Result<bool> {
        if self.root.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.root)?;
        Ok(true)
    }

    fn write_post(&self, document: &OutputDocument) -> Result<PathBuf> {
        let path = self.root.join(&document.file_name);
        fs::write(&path, document.render())?;
        Ok(path)
    }
}
