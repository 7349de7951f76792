use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Utility for flushing generated output files with consistent patterns.
///
/// Content is written verbatim, overwriting any existing file; parent
/// directories are created as needed.
pub struct FileWriter {
    generated_files: Vec<PathBuf>,
}

impl FileWriter {
    pub fn new() -> Self {
        Self {
            generated_files: Vec::new(),
        }
    }

    /// Write a generated file with the given content.
    pub fn write_file(&mut self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        self.generated_files.push(path.to_path_buf());
        Ok(())
    }

    /// Get the list of files written so far.
    pub fn generated_files(&self) -> &[PathBuf] {
        &self.generated_files
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("proxies.h");

        let mut writer = FileWriter::new();
        writer.write_file(&path, "class Foo;\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "class Foo;\n");
        assert_eq!(writer.generated_files(), &[path]);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/proxies.cpp");

        let mut writer = FileWriter::new();
        writer.write_file(&path, "").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("proxies.h");
        fs::write(&path, "stale content").unwrap();

        let mut writer = FileWriter::new();
        writer.write_file(&path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_tracks_multiple_files() {
        let dir = TempDir::new().unwrap();
        let mut writer = FileWriter::new();

        writer.write_file(dir.path().join("a.h"), "a").unwrap();
        writer.write_file(dir.path().join("b.cpp"), "b").unwrap();

        assert_eq!(writer.generated_files().len(), 2);
    }
}
