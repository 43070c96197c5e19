//! Template handling for macro generation
//!
//! Provides token parsing, modifier transforms, replacement resolution and
//! template loading.

pub mod loader;
pub mod modifiers;
pub mod parser;
pub mod resolver;

// Re-export public API
pub use loader::{TemplateLoader, TemplateSource, HEADER_MARKER};
pub use modifiers::{transform, CaseTransform};
pub use parser::{MacroToken, TemplateParser};
pub use resolver::{token_text, PlaceholderResolver, ReplacementMap};
