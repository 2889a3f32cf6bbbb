use crate::domain::ports::Storage;
use crate::utils::error::{FlowError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads text files relative to a base directory.
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
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());

        fs::read_to_string(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FlowError::NotFound {
                path: path.display().to_string(),
            },
            _ => FlowError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("flows.txt"), "1.1.1.1:1 => 2.2.2.2:2\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let content = storage.read_to_string(Path::new("flows.txt")).unwrap();
        assert_eq!(content, "1.1.1.1:1 => 2.2.2.2:2\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        match storage.read_to_string(Path::new("missing.yaf.txt")) {
            Err(FlowError::NotFound { path }) => assert_eq!(path, "missing.yaf.txt"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(matches!(
            storage.read_to_string(Path::new("sub")),
            Err(FlowError::Io(_))
        ));
    }
}
