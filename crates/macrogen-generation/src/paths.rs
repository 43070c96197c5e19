//! Lexical path checks
//!
//! Generated paths usually do not exist yet, so containment is decided on
//! normalized components rather than through `canonicalize`.

use std::path::{Component, Path, PathBuf};

use crate::error::GenerationError;

/// Resolve `.` and `..` components without touching the filesystem
///
/// `..` never climbs above the root of an absolute path; on relative paths
/// leading `..` components are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.file_name().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Make `path` absolute against the current directory, then normalize it
pub fn absolutize(path: &Path) -> Result<PathBuf, GenerationError> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Join `path` onto `base` (absolute `path` replaces it) and normalize
pub fn resolve_under(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Fail unless `path` is `root` or lies beneath it
///
/// Both paths are expected to be normalized.
pub fn ensure_within(path: &Path, root: &Path) -> Result<(), GenerationError> {
    if path.starts_with(root) {
        Ok(())
    } else {
        Err(GenerationError::PathOutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
    }
}
