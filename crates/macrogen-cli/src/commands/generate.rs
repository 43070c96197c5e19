// Run the generation pipeline

use macrogen_generation::{
    GenerationManager, GenerationManagerConfig, GenerationReport, ReportGenerator, ReportStatus,
};
use tracing::debug;

use super::{Command, CommandContext};
use crate::{
    error::{CliError, CliResult},
    logging::VerbosityLevel,
    output::OutputStyle,
};

/// How the generation report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Generate files from the configured templates
pub struct GenerateCommand {
    pub context: CommandContext,
    pub format: ReportFormat,
}

impl GenerateCommand {
    pub fn new(context: CommandContext) -> Self {
        Self {
            context,
            format: ReportFormat::Text,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the pipeline and persist the reconciled macros
    ///
    /// The configuration is saved even when the run fails, since
    /// reconciliation has already happened by then.
    pub fn run(&self) -> CliResult<GenerationReport> {
        let (manager, mut config) = self.context.load()?;
        let mut anchored = manager.anchored(&config);
        debug!("Project root: {}", anchored.project_root.display());

        let engine = GenerationManager::with_config(GenerationManagerConfig {
            dry_run: self.context.dry_run,
        });
        let report = engine.run(&mut anchored);

        if config.macros != anchored.macros {
            config.macros = anchored.macros;
            self.context.persist(&manager, &config)?;
        }

        Ok(report)
    }

    fn print_report(&self, report: &GenerationReport) -> CliResult<()> {
        match self.format {
            ReportFormat::Json => {
                let json = ReportGenerator::generate_json(report)?;
                println!("{}", json);
            }
            ReportFormat::Text => {
                let level = VerbosityLevel::current();
                if VerbosityLevel::Normal <= level {
                    print!("{}", ReportGenerator::generate_text(report));
                }
                if let Some(line) = Self::completion_line(&OutputStyle::default(), report, level) {
                    println!("{}", line);
                }
            }
        }
        Ok(())
    }

    /// Closing line for a text report, hidden in quiet mode and after errors
    fn completion_line(
        style: &OutputStyle,
        report: &GenerationReport,
        level: VerbosityLevel,
    ) -> Option<String> {
        if level < VerbosityLevel::Normal {
            return None;
        }
        match report.status() {
            ReportStatus::Completed => {
                let verb = if report.dry_run { "Would generate" } else { "Generated" };
                Some(style.success(&format!("{} {} file(s)", verb, report.files.len())))
            }
            ReportStatus::NothingGenerated => Some(style.warning("Nothing was generated")),
            ReportStatus::PartiallyWritten | ReportStatus::Failed => None,
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self) -> CliResult<()> {
        let mut report = self.run()?;
        self.print_report(&report)?;

        match report.error.take() {
            Some(error) => Err(CliError::from(error)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macrogen_generation::GeneratedFile;
    use std::path::PathBuf;

    fn completed(dry_run: bool) -> GenerationReport {
        let mut report = GenerationReport::new(dry_run);
        report.record(GeneratedFile {
            path: PathBuf::from("generated/a.txt"),
            template_id: "a".to_string(),
            batch_index: 0,
            content: "a".to_string(),
            overwritten: false,
        });
        report
    }

    #[test]
    fn test_completion_line_hidden_when_quiet() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(
            GenerateCommand::completion_line(&style, &completed(false), VerbosityLevel::Quiet),
            None
        );
        assert_eq!(
            GenerateCommand::completion_line(
                &style,
                &GenerationReport::new(false),
                VerbosityLevel::Quiet
            ),
            None
        );
    }

    #[test]
    fn test_completion_line_at_normal_verbosity() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(
            GenerateCommand::completion_line(&style, &completed(false), VerbosityLevel::Normal),
            Some("✓ Generated 1 file(s)".to_string())
        );
        assert_eq!(
            GenerateCommand::completion_line(&style, &completed(true), VerbosityLevel::Verbose),
            Some("✓ Would generate 1 file(s)".to_string())
        );
        assert_eq!(
            GenerateCommand::completion_line(
                &style,
                &GenerationReport::new(false),
                VerbosityLevel::Normal
            ),
            Some("⚠ Nothing was generated".to_string())
        );
    }
}
