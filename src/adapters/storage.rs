use crate::core::FileSystemService;
use crate::utils::error::{GreeterError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Absolute paths ignore the base directory.
    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSystemService for LocalStorage {
    fn read(&self, file_name: &str) -> Result<String> {
        let full_path = self.resolve(file_name);
        tracing::debug!("Reading {}", full_path.display());

        let data = fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GreeterError::ResourceNotFound {
                path: full_path.display().to_string(),
            },
            _ => GreeterError::IoError(e),
        })?;

        String::from_utf8(data).map_err(|source| GreeterError::InvalidEncoding {
            path: full_path.display().to_string(),
            source,
        })
    }
}
