//! Core data models for macro generation

use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

/// A template file split into its output-path expression and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template identifier (file name without extension)
    pub id: String,
    /// Where the template was loaded from
    pub source_path: PathBuf,
    /// Output path relative to the output root, still containing tokens
    pub path_expression: String,
    /// Template body, still containing tokens
    pub body: String,
}

/// User-authored value for one macro identifier
///
/// Mirrors the persisted tuple `(name, is_scalar, value, batch_values)` so a
/// definition can be toggled between scalar and batch without losing either
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDefinition {
    /// Identifier without the surrounding `$`
    pub name: String,
    /// Whether `value` (true) or `batch_values` (false) is used
    #[serde(default = "default_is_scalar")]
    pub is_scalar: bool,
    /// Scalar replacement value
    #[serde(default)]
    pub value: String,
    /// One replacement value per generated instance
    #[serde(default)]
    pub batch_values: Vec<String>,
}

fn default_is_scalar() -> bool {
    true
}

/// Borrowed view of the active value of a [`MacroDefinition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroValue<'a> {
    /// Same value for every batch index
    Scalar(&'a str),
    /// One value per batch index
    Batch(&'a [String]),
}

impl MacroDefinition {
    /// Create a scalar definition
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_scalar: true,
            value: value.into(),
            batch_values: Vec::new(),
        }
    }

    /// Create a batch definition
    pub fn batch<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            is_scalar: false,
            value: String::new(),
            batch_values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Active value of this definition
    pub fn kind(&self) -> MacroValue<'_> {
        if self.is_scalar {
            MacroValue::Scalar(&self.value)
        } else {
            MacroValue::Batch(&self.batch_values)
        }
    }

    /// Value to substitute for the given batch index
    ///
    /// Scalars ignore the index. A batch index past the end yields an empty
    /// string, which the resolver treats as "not configured".
    pub fn value_at(&self, index: usize) -> &str {
        match self.kind() {
            MacroValue::Scalar(value) => value,
            MacroValue::Batch(values) => values.get(index).map(String::as_str).unwrap_or(""),
        }
    }
}

/// Identifiers requested by a template set, with the modifiers seen for each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroRequest {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl MacroRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identifier, optionally with a modifier
    pub fn insert(&mut self, identifier: impl Into<String>, modifier: Option<&str>) {
        let modifiers = self.entries.entry(identifier.into()).or_default();
        if let Some(modifier) = modifier {
            modifiers.insert(modifier.to_string());
        }
    }

    /// Merge another request into this one
    pub fn merge(&mut self, other: MacroRequest) {
        for (identifier, modifiers) in other.entries {
            self.entries.entry(identifier).or_default().extend(modifiers);
        }
    }

    /// Whether the identifier is requested
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Modifiers requested for an identifier
    pub fn modifiers(&self, identifier: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(identifier)
    }

    /// Requested identifiers in sorted order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Identifiers with their modifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identifiers were requested
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the engine needs for one run
///
/// `macros` is read and reconciled in place; persisting it afterwards is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root that the template and output directories must live under
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,
    /// Directory scanned for `*.txt` templates
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    /// Root under which every generated file is written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Macro definitions, in user order
    #[serde(default)]
    pub macros: Vec<MacroDefinition>,
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            templates_dir: default_templates_dir(),
            output_dir: default_output_dir(),
            macros: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Look up a definition by identifier
    pub fn find_macro(&self, name: &str) -> Option<&MacroDefinition> {
        self.macros.iter().find(|m| m.name == name)
    }

    /// Insert or replace a definition, keeping its position if it exists
    pub fn upsert_macro(&mut self, definition: MacroDefinition) {
        match self.macros.iter_mut().find(|m| m.name == definition.name) {
            Some(existing) => *existing = definition,
            None => self.macros.push(definition),
        }
    }
}

/// A file produced by the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Destination path
    pub path: PathBuf,
    /// Template it was rendered from
    pub template_id: String,
    /// Batch index it was rendered for
    pub batch_index: usize,
    /// Rendered body
    pub content: String,
    /// Whether the destination already existed
    #[serde(default)]
    pub overwritten: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_value_ignores_index() {
        let def = MacroDefinition::scalar("NAME", "bob");
        assert_eq!(def.value_at(0), "bob");
        assert_eq!(def.value_at(7), "bob");
        assert_eq!(def.kind(), MacroValue::Scalar("bob"));
    }

    #[test]
    fn test_batch_value_by_index() {
        let def = MacroDefinition::batch("NAME", ["a", "b"]);
        assert_eq!(def.value_at(0), "a");
        assert_eq!(def.value_at(1), "b");
        assert_eq!(def.value_at(2), "");
    }

    #[test]
    fn test_request_accumulates_modifiers() {
        let mut request = MacroRequest::new();
        request.insert("NAME", None);
        request.insert("NAME", Some("UPPER"));
        request.insert("NAME", Some("UPPER"));
        request.insert("NAME", Some("LOWER"));

        assert_eq!(request.len(), 1);
        let modifiers = request.modifiers("NAME").unwrap();
        assert_eq!(modifiers.len(), 2);
        assert!(modifiers.contains("UPPER"));
        assert!(modifiers.contains("LOWER"));
    }

    #[test]
    fn test_request_merge() {
        let mut a = MacroRequest::new();
        a.insert("A", Some("UPPER"));
        let mut b = MacroRequest::new();
        b.insert("A", Some("CAMEL"));
        b.insert("B", None);

        a.merge(b);
        assert_eq!(a.identifiers().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(a.modifiers("A").unwrap().len(), 2);
    }

    #[test]
    fn test_upsert_macro_keeps_position() {
        let mut config = GeneratorConfig::default();
        config.macros.push(MacroDefinition::scalar("A", "1"));
        config.macros.push(MacroDefinition::scalar("B", "2"));

        config.upsert_macro(MacroDefinition::batch("A", ["x", "y"]));
        config.upsert_macro(MacroDefinition::scalar("C", "3"));

        let names: Vec<_> = config.macros.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(!config.find_macro("A").unwrap().is_scalar);
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.project_root, PathBuf::from("."));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.output_dir, PathBuf::from("generated"));
        assert!(config.macros.is_empty());
    }
}
