use crate::error::{MernkitError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem capability the engine mutates the world through.
///
/// A single seam so tests can observe and fake every mutation.
pub trait FileGateway {
    /// Create a directory and all parents, idempotent.
    fn mkdir(&self, path: &Path) -> Result<()>;
    /// Create or overwrite a file with the given text, creating parents.
    fn write_file(&self, path: &Path, text: &str) -> Result<()>;
    fn read_file(&self, path: &Path) -> Result<String>;
    /// Remove a directory subtree. Missing paths are not an error.
    fn remove_tree(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
pub struct DiskGateway;

impl FileGateway for DiskGateway {
    fn mkdir(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| fs_err(path, e))
    }

    fn write_file(&self, path: &Path, text: &str) -> Result<()> {
        atomic_write(path, text.as_bytes())
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| fs_err(path, e))
    }

    fn remove_tree(&self, path: &Path) -> Result<()> {
        if path.exists() {
            std::fs::remove_dir_all(path).map_err(|e| fs_err(path, e))?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn fs_err(path: &Path, source: std::io::Error) -> MernkitError {
    MernkitError::Fs {
        path: path.to_path_buf(),
        source,
    }
}

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from leaving a corrupt generated file behind.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fs_err(parent, e))?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fs_err(path, e))?;
    tmp.write_all(data).map_err(|e| fs_err(path, e))?;
    tmp.persist(path).map_err(|e| fs_err(path, e.error))?;
    Ok(())
}
