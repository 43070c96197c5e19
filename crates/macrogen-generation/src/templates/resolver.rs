//! Replacement resolution
//!
//! Turns a [`MacroRequest`] plus the current macro values into the literal
//! token → value map used for one generation pass.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{MacroDefinition, MacroRequest};
use crate::templates::modifiers::transform;

/// Literal token text (`$IDENT$`, `$IDENT.MOD$`) mapped to its substitution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: HashMap<String, String>,
}

impl ReplacementMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a substitution for a token
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }

    /// Substitution for a token, if one was registered
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Whether the token has a substitution
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of registered tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the token text for an identifier and optional modifier
pub fn token_text(identifier: &str, modifier: Option<&str>) -> String {
    match modifier {
        Some(modifier) => format!("${}.{}$", identifier, modifier),
        None => format!("${}$", identifier),
    }
}

/// Resolves requested macros into replacement maps
pub struct PlaceholderResolver;

impl PlaceholderResolver {
    /// Resolve every requested identifier through `value_of`
    ///
    /// Identifiers whose value is missing or empty contribute no tokens at
    /// all. Modifiers without a transform are skipped individually.
    pub fn resolve<'v, F>(request: &MacroRequest, value_of: F) -> ReplacementMap
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut map = ReplacementMap::new();

        for (identifier, modifiers) in request.iter() {
            let value = match value_of(identifier) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    debug!("No value configured for macro {}, leaving it unsubstituted", identifier);
                    continue;
                }
            };

            map.insert(token_text(identifier, None), value);

            for modifier in modifiers {
                match transform(value, modifier) {
                    Some(transformed) => map.insert(token_text(identifier, Some(modifier)), transformed),
                    None => debug!("Dropping unknown modifier {}.{}", identifier, modifier),
                }
            }
        }

        map
    }

    /// Resolve against macro definitions for one batch index
    pub fn resolve_batch(
        request: &MacroRequest,
        definitions: &[MacroDefinition],
        batch_index: usize,
    ) -> ReplacementMap {
        Self::resolve(request, |identifier| {
            definitions
                .iter()
                .find(|d| d.name == identifier)
                .map(|d| d.value_at(batch_index))
        })
    }
}
