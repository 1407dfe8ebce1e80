use crate::domain::ports::Storage;
use crate::utils::error::{Result, RouteGenError};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        fs::read(&full_path).map_err(|source| RouteGenError::InputReadError {
            path: full_path.display().to_string(),
            source,
        })
    }

    fn create_file(&self, path: &str) -> Result<Self::Writer> {
        let full_path = self.full_path(path);
        let to_error = |source: std::io::Error| RouteGenError::OutputWriteError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(to_error)?;
            }
        }

        let file = File::create(&full_path).map_err(to_error)?;
        Ok(BufWriter::new(file))
    }

    fn location(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}
