//! File-based script source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Script file loaded in full at construction.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    contents: String,
}

impl FileSource {
    /// Read the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "Script file loaded");

        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    /// Path the script was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The script text.
    pub fn into_contents(self) -> String {
        self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_reads_contents() {
        let test_file = std::env::temp_dir().join("swipeable_file_source_new.jsonl");
        fs::write(&test_file, "{\"op\":\"begin\"}\n").unwrap();

        let source = FileSource::new(&test_file).unwrap();
        let _ = fs::remove_file(&test_file);

        assert_eq!(source.path(), test_file.as_path());
        assert_eq!(source.into_contents(), "{\"op\":\"begin\"}\n");
    }

    #[test]
    fn directory_is_an_io_error() {
        let result = FileSource::new(std::env::temp_dir());
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
