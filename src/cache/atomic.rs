//! Write-temp-rename file writer for the cache

use super::{CacheError, CacheResult};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Atomic file writer that uses write-temp-rename pattern
pub struct AtomicFileWriter {
    target_path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFileWriter {
    /// Create a new atomic file writer for the target path
    pub fn new(target_path: &Path) -> CacheResult<Self> {
        let temp_path = Self::generate_temp_path(target_path)?;

        Ok(AtomicFileWriter {
            target_path: target_path.to_path_buf(),
            temp_path,
        })
    }

    /// Write content to the file atomically
    pub fn write_content(&self, content: &str) -> CacheResult<()> {
        if let Some(parent) = self.target_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.temp_path, content)?;
        fs::rename(&self.temp_path, &self.target_path)
            .map_err(|e| CacheError::storage(format!("Failed to commit atomic write: {}", e)))
    }

    /// Write JSON data to the file atomically
    pub fn write_json<T: serde::Serialize>(&self, data: &T) -> CacheResult<()> {
        let content = serde_json::to_string_pretty(data)?;
        self.write_content(&content)
    }

    fn generate_temp_path(target: &Path) -> CacheResult<PathBuf> {
        let filename = target
            .file_name()
            .ok_or_else(|| CacheError::storage("Target path has no filename"))?;

        let temp_name = format!("{}.tmp.{}", filename.to_string_lossy(), Uuid::new_v4());

        Ok(match target.parent() {
            Some(parent) => parent.join(temp_name),
            None => PathBuf::from(temp_name),
        })
    }
}

impl Drop for AtomicFileWriter {
    fn drop(&mut self) {
        if self.temp_path.exists() {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("sub").join("data.json");

        AtomicFileWriter::new(&target)
            .unwrap()
            .write_json(&serde_json::json!({"a": 1}))
            .unwrap();

        assert!(target.exists());
        let leftovers: Vec<_> = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }
}
