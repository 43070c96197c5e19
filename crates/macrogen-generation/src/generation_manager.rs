//! Generation manager for orchestrating generation runs
//!
//! Drives the whole pipeline: path validation, template discovery,
//! reconciliation, batch planning, and per-batch rendering and writing.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{
    batch::BatchPlanner,
    error::GenerationError,
    models::{GeneratedFile, GeneratorConfig, MacroRequest, Template},
    output_writer::{OutputWriter, OutputWriterConfig},
    paths,
    reconcile::{reconcile, ReconcileSummary},
    report_generator::GenerationReport,
    templates::{
        CaseTransform, PlaceholderResolver, ReplacementMap, TemplateLoader, TemplateParser,
    },
};

/// Configuration for the generation manager
#[derive(Debug, Clone, Default)]
pub struct GenerationManagerConfig {
    /// Run every step but create no directories or files
    pub dry_run: bool,
}

/// Absolute, normalized directories for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Project root
    pub project_root: PathBuf,
    /// Template directory, inside the project root
    pub templates_dir: PathBuf,
    /// Output root, inside the project root
    pub output_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve and check the directories named by `config`
    ///
    /// Relative directories are taken relative to the project root, which in
    /// turn is taken relative to the current directory.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let project_root = paths::absolutize(&config.project_root)?;

        let templates_dir = paths::resolve_under(&project_root, &config.templates_dir);
        paths::ensure_within(&templates_dir, &project_root)?;

        let output_dir = paths::resolve_under(&project_root, &config.output_dir);
        paths::ensure_within(&output_dir, &project_root)?;

        Ok(Self {
            project_root,
            templates_dir,
            output_dir,
        })
    }
}

/// Orchestrates generation runs
pub struct GenerationManager {
    config: GenerationManagerConfig,
    writer: OutputWriter,
}

impl GenerationManager {
    /// Creates a new generation manager with default configuration
    pub fn new() -> Self {
        Self::with_config(GenerationManagerConfig::default())
    }

    /// Creates a new generation manager with custom configuration
    pub fn with_config(config: GenerationManagerConfig) -> Self {
        let writer = OutputWriter::with_config(OutputWriterConfig {
            dry_run: config.dry_run,
        });
        Self { config, writer }
    }

    /// Gets the current configuration
    pub fn config(&self) -> &GenerationManagerConfig {
        &self.config
    }

    /// Run the full pipeline
    ///
    /// `config.macros` is reconciled in place as soon as the templates have
    /// been read, even if the run fails later. Fatal errors are stored in the
    /// returned report rather than returned, so the files written before the
    /// failure are never lost.
    pub fn run(&self, config: &mut GeneratorConfig) -> GenerationReport {
        let started = Instant::now();
        let mut report = GenerationReport::new(self.config.dry_run);

        if let Err(e) = self.execute(config, &mut report) {
            warn!("Generation aborted: {}", e);
            report.error = Some(e);
        }
        report.stats.time_elapsed = started.elapsed();

        let orphaned = report.orphaned_files();
        if !orphaned.is_empty() {
            warn!("{} file(s) written before the run aborted", orphaned.len());
            for path in &orphaned {
                warn!("Orphaned file: {}", path.display());
            }
        }

        info!(
            "Generation finished: {} ({} files)",
            report.status(),
            report.files.len()
        );
        report
    }

    /// Reconcile `config.macros` against the current templates without
    /// generating anything
    pub fn sync_macros(
        &self,
        config: &mut GeneratorConfig,
    ) -> Result<ReconcileSummary, GenerationError> {
        let paths = ResolvedPaths::from_config(config)?;
        let request = Self::load_request(&paths.templates_dir)?;
        let summary = reconcile(&mut config.macros, &request);

        info!(
            "Synchronized macros: {} added, {} removed",
            summary.added.len(),
            summary.removed.len()
        );
        Ok(summary)
    }

    fn execute(
        &self,
        config: &mut GeneratorConfig,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let paths = ResolvedPaths::from_config(config)?;

        let sources = TemplateLoader::read_sources(&paths.templates_dir)?;
        let request =
            TemplateParser::extract_request_all(sources.iter().map(|s| s.content.as_str()));
        debug!("Templates request {} macro identifier(s)", request.len());
        report.reconciliation = Some(reconcile(&mut config.macros, &request));

        let templates = TemplateLoader::parse_all(&sources)?;
        report.stats.templates = templates.len();
        self.writer.ensure_directory(&paths.output_dir)?;
        if templates.is_empty() {
            info!("No templates found in {}", paths.templates_dir.display());
            return Ok(());
        }
        Self::warn_unknown_modifiers(&request);

        let plan = BatchPlanner::plan(&config.macros)?;
        report.stats.batches_planned = plan.count();
        debug!(
            "Planned {} pass(es){}",
            plan.count(),
            if plan.is_batched() { " (batched)" } else { "" }
        );

        for batch_index in plan.indices() {
            let replacements =
                PlaceholderResolver::resolve_batch(&request, &config.macros, batch_index);

            for template in &templates {
                let mut file =
                    Self::render(template, &replacements, &paths.output_dir, batch_index)?;
                file.overwritten = self.writer.write(&file.path, &file.content)?.overwritten;
                report.record(file);
            }

            report.stats.batches_completed += 1;
            info!("Completed batch {}/{}", batch_index + 1, plan.count());
        }

        Ok(())
    }

    fn render(
        template: &Template,
        replacements: &ReplacementMap,
        output_dir: &Path,
        batch_index: usize,
    ) -> Result<GeneratedFile, GenerationError> {
        let relative = TemplateParser::substitute(&template.path_expression, replacements);
        let path = paths::resolve_under(output_dir, Path::new(&relative));
        paths::ensure_within(&path, output_dir)?;

        Ok(GeneratedFile {
            path,
            template_id: template.id.clone(),
            batch_index,
            content: TemplateParser::substitute(&template.body, replacements),
            overwritten: false,
        })
    }

    fn load_request(templates_dir: &Path) -> Result<MacroRequest, GenerationError> {
        let sources = TemplateLoader::read_sources(templates_dir)?;
        Ok(TemplateParser::extract_request_all(
            sources.iter().map(|s| s.content.as_str()),
        ))
    }

    fn warn_unknown_modifiers(request: &MacroRequest) {
        for (identifier, modifiers) in request.iter() {
            for modifier in modifiers {
                if CaseTransform::from_modifier(modifier).is_none() {
                    warn!(
                        "Unknown modifier {} on macro {}; token left unchanged",
                        modifier, identifier
                    );
                }
            }
        }
    }
}

impl Default for GenerationManager {
    fn default() -> Self {
        Self::new()
    }
}
