//! Output writer for generated files
//!
//! Writes one rendered file at a time so the pipeline can record each
//! success before attempting the next. Existing files are overwritten and
//! nothing is rolled back; a failed run reports what it left behind instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::GenerationError;

/// Configuration for output writing
#[derive(Debug, Clone, Default)]
pub struct OutputWriterConfig {
    /// Whether to run in dry-run mode (preview only)
    pub dry_run: bool,
}

/// Result of writing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteResult {
    /// Path to the file that was (or would have been) written
    pub path: PathBuf,
    /// Whether the file was actually written
    pub written: bool,
    /// Whether an existing file was replaced
    pub overwritten: bool,
    /// Bytes in the rendered content
    pub bytes: usize,
}

/// Writes rendered files to disk
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    config: OutputWriterConfig,
}

impl OutputWriter {
    /// Create a new output writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new output writer with custom configuration
    pub fn with_config(config: OutputWriterConfig) -> Self {
        Self { config }
    }

    /// Whether this writer only previews
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Create `dir` and its parents unless in dry-run mode
    pub fn ensure_directory(&self, dir: &Path) -> Result<(), GenerationError> {
        if self.config.dry_run || dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|e| {
            GenerationError::Config(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        debug!("Created directory {}", dir.display());
        Ok(())
    }

    /// Write `content` to `path`, creating parent directories as needed
    pub fn write(&self, path: &Path, content: &str) -> Result<FileWriteResult, GenerationError> {
        let overwritten = path.exists();

        if self.config.dry_run {
            info!("Dry run: would write {}", path.display());
            return Ok(FileWriteResult {
                path: path.to_path_buf(),
                written: false,
                overwritten,
                bytes: content.len(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| GenerationError::WriteFailed {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(path, content).map_err(|source| GenerationError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Wrote {}", path.display());
        Ok(FileWriteResult {
            path: path.to_path_buf(),
            written: true,
            overwritten,
            bytes: content.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_output_writer() {
        let writer = OutputWriter::new();
        assert!(!writer.is_dry_run());
    }

    #[test]
    fn test_write_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        let result = OutputWriter::new().write(&path, "hello").unwrap();

        assert!(result.written);
        assert!(!result.overwritten);
        assert_eq!(result.bytes, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_create_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("c.txt");

        OutputWriter::new().write(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");
        fs::write(&path, "old").unwrap();

        let result = OutputWriter::new().write(&path, "new").unwrap();

        assert!(result.overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_dry_run_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("test.txt");
        let writer = OutputWriter::with_config(OutputWriterConfig { dry_run: true });

        let result = writer.write(&path, "content").unwrap();
        writer.ensure_directory(&temp_dir.path().join("out")).unwrap();

        assert!(!result.written);
        assert!(!path.exists());
        assert!(!temp_dir.path().join("sub").exists());
        assert!(!temp_dir.path().join("out").exists());
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let path = blocker.join("child.txt");

        let err = OutputWriter::new().write(&path, "x").unwrap_err();

        match err {
            GenerationError::WriteFailed { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
