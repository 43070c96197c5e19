#![warn(missing_docs)]

//! Macro-driven template generation for macrogen
//!
//! Scans a directory of `*.txt` templates for `$IDENT$` and `$IDENT.MOD$`
//! tokens, keeps the macro definitions in step with what the templates
//! request, and renders one output file per template and batch index.

pub mod batch;
pub mod error;
pub mod generation_manager;
pub mod models;
pub mod output_writer;
pub mod paths;
pub mod reconcile;
pub mod report_generator;
pub mod templates;

// Re-export public API
pub use batch::{BatchPlan, BatchPlanner};
pub use error::GenerationError;
pub use generation_manager::{GenerationManager, GenerationManagerConfig, ResolvedPaths};
pub use models::{
    GeneratedFile, GeneratorConfig, MacroDefinition, MacroRequest, MacroValue, Template,
};
pub use output_writer::{FileWriteResult, OutputWriter, OutputWriterConfig};
pub use reconcile::{reconcile, ReconcileSummary};
pub use report_generator::{
    GenerationReport, GenerationStats, ReportGenerator, ReportStatus, ReportSummary,
};
pub use templates::{
    token_text, transform, CaseTransform, MacroToken, PlaceholderResolver, ReplacementMap,
    TemplateLoader, TemplateParser, TemplateSource,
};
