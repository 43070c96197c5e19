//! Template loading from a template directory
//!
//! Every `.txt` file directly inside the directory is a template. Its first
//! line is `###<output path>` and the rest of the file is the body.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GenerationError;
use crate::models::Template;

/// Marker every template header line starts with
pub const HEADER_MARKER: &str = "###";

/// Extension (case-insensitive) of template files
pub const TEMPLATE_EXTENSION: &str = "txt";

/// Raw contents of a template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Path the contents were read from
    pub path: PathBuf,
    /// Full file contents, header included
    pub content: String,
}

/// Loads templates from a directory
pub struct TemplateLoader;

impl TemplateLoader {
    /// List template files in `dir`, sorted by file name
    ///
    /// Subdirectories are not scanned.
    pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, GenerationError> {
        if !dir.is_dir() {
            return Err(GenerationError::Config(format!(
                "Template directory not found: {}",
                dir.display()
            )));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_template = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(TEMPLATE_EXTENSION));
            if is_template && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        debug!("Discovered {} templates in {}", paths.len(), dir.display());
        Ok(paths)
    }

    /// Read every template file in `dir`
    pub fn read_sources(dir: &Path) -> Result<Vec<TemplateSource>, GenerationError> {
        Self::discover(dir)?
            .into_iter()
            .map(|path| {
                match fs::read_to_string(&path) {
                    Ok(content) => Ok(TemplateSource { path, content }),
                    Err(source) => Err(GenerationError::ReadFailed { path, source }),
                }
            })
            .collect()
    }

    /// Split a template into header and body, validating both
    pub fn parse(source: &TemplateSource) -> Result<Template, GenerationError> {
        let (first_line, body) = match source.content.split_once('\n') {
            Some((first_line, body)) => (first_line.strip_suffix('\r').unwrap_or(first_line), body),
            None => (source.content.as_str(), ""),
        };

        let path_expression = first_line
            .strip_prefix(HEADER_MARKER)
            .ok_or_else(|| Self::format_error(source, "Incorrect header syntax or empty file"))?
            .trim();

        if path_expression.is_empty() {
            return Err(Self::format_error(source, "Empty output path in header"));
        }
        if body.is_empty() {
            return Err(Self::format_error(source, "Empty template body"));
        }

        let id = source
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Template {
            id,
            source_path: source.path.clone(),
            path_expression: path_expression.to_string(),
            body: body.to_string(),
        })
    }

    /// Parse every source, stopping at the first invalid one
    pub fn parse_all(sources: &[TemplateSource]) -> Result<Vec<Template>, GenerationError> {
        sources.iter().map(Self::parse).collect()
    }

    fn format_error(source: &TemplateSource, message: &str) -> GenerationError {
        GenerationError::TemplateFormat {
            template: source.path.clone(),
            message: message.to_string(),
        }
    }
}
