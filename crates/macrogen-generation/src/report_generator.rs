//! Report generation for generation runs
//!
//! A run always produces a [`GenerationReport`], even when it aborts, so the
//! caller can see which files were written before the failure.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::models::GeneratedFile;
use crate::reconcile::ReconcileSummary;

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Every planned file was written
    Completed,
    /// A fatal error stopped the run after some files were written
    PartiallyWritten,
    /// A fatal error stopped the run before anything was written
    Failed,
    /// No templates or zero passes, so nothing was produced
    NothingGenerated,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportStatus::Completed => "completed",
            ReportStatus::PartiallyWritten => "partially written",
            ReportStatus::Failed => "failed",
            ReportStatus::NothingGenerated => "nothing generated",
        };
        f.write_str(label)
    }
}

/// Statistics about a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Templates loaded
    pub templates: usize,
    /// Passes planned
    pub batches_planned: usize,
    /// Passes that finished every template
    pub batches_completed: usize,
    /// Total lines across written files
    pub lines_generated: usize,
    /// Files that replaced an existing file
    pub files_overwritten: usize,
    /// Time elapsed during the run
    pub time_elapsed: Duration,
}

/// Complete record of one run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written (or planned, in dry-run mode) in write order
    pub files: Vec<GeneratedFile>,
    /// Fatal error that stopped the run, if any
    pub error: Option<GenerationError>,
    /// Changes made to the macro definitions before generating
    pub reconciliation: Option<ReconcileSummary>,
    /// Whether the run was a dry run
    pub dry_run: bool,
    /// Run statistics
    pub stats: GenerationStats,
}

impl GenerationReport {
    /// Create an empty report
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Record a written file
    pub fn record(&mut self, file: GeneratedFile) {
        self.stats.lines_generated += file.content.lines().count();
        if file.overwritten {
            self.stats.files_overwritten += 1;
        }
        self.files.push(file);
    }

    /// Outcome of the run
    ///
    /// An aborted dry run is `Failed`, since nothing reached the disk.
    pub fn status(&self) -> ReportStatus {
        match (&self.error, self.files.is_empty()) {
            (Some(_), true) => ReportStatus::Failed,
            (Some(_), false) if self.dry_run => ReportStatus::Failed,
            (Some(_), false) => ReportStatus::PartiallyWritten,
            (None, true) => ReportStatus::NothingGenerated,
            (None, false) => ReportStatus::Completed,
        }
    }

    /// Whether the run finished without a fatal error
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Paths of every recorded file
    pub fn written_files(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }

    /// Files left behind by an aborted run
    ///
    /// Empty for successful runs and for dry runs, which leave nothing on
    /// disk.
    pub fn orphaned_files(&self) -> Vec<PathBuf> {
        if self.error.is_none() || self.dry_run {
            return Vec::new();
        }
        self.written_files()
    }
}

/// Serializable digest of a [`GenerationReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Overall outcome
    pub status: ReportStatus,
    /// Whether the run was a dry run
    pub dry_run: bool,
    /// Paths written (or planned)
    pub files: Vec<PathBuf>,
    /// Paths written before a fatal error
    pub orphaned: Vec<PathBuf>,
    /// Fatal error message, if any
    pub error: Option<String>,
    /// Identifiers added during reconciliation
    pub macros_added: Vec<String>,
    /// Identifiers removed during reconciliation
    pub macros_removed: Vec<String>,
    /// Run statistics
    pub stats: GenerationStats,
}

/// Renders generation reports as text or JSON
pub struct ReportGenerator;

impl ReportGenerator {
    /// Build the serializable summary of a report
    pub fn summarize(report: &GenerationReport) -> ReportSummary {
        let (macros_added, macros_removed) = match &report.reconciliation {
            Some(summary) => (summary.added.clone(), summary.removed.clone()),
            None => (Vec::new(), Vec::new()),
        };

        ReportSummary {
            status: report.status(),
            dry_run: report.dry_run,
            files: report.written_files(),
            orphaned: report.orphaned_files(),
            error: report.error.as_ref().map(ToString::to_string),
            macros_added,
            macros_removed,
            stats: report.stats.clone(),
        }
    }

    /// Generate a report as formatted text
    pub fn generate_text(report: &GenerationReport) -> String {
        Self::format_summary(&Self::summarize(report))
    }

    /// Generate a report as JSON
    pub fn generate_json(report: &GenerationReport) -> Result<String, GenerationError> {
        Ok(serde_json::to_string_pretty(&Self::summarize(report))?)
    }

    fn format_summary(summary: &ReportSummary) -> String {
        let mut output = String::new();

        output.push_str("GENERATION REPORT\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("Status: {}", summary.status));
        if summary.dry_run {
            output.push_str(" (dry run)");
        }
        output.push('\n');
        output.push_str(&format!("Templates: {}\n", summary.stats.templates));
        output.push_str(&format!(
            "Batches: {}/{}\n",
            summary.stats.batches_completed, summary.stats.batches_planned
        ));
        output.push_str(&format!("Lines Generated: {}\n", summary.stats.lines_generated));
        if summary.stats.files_overwritten > 0 {
            let label = if summary.dry_run { "Would Overwrite" } else { "Overwritten" };
            output.push_str(&format!("{}: {}\n", label, summary.stats.files_overwritten));
        }
        output.push_str(&format!(
            "Time Elapsed: {:.2}s\n",
            summary.stats.time_elapsed.as_secs_f64()
        ));

        if !summary.macros_added.is_empty() {
            output.push_str(&format!("Macros Added: {}\n", summary.macros_added.join(", ")));
        }
        if !summary.macros_removed.is_empty() {
            output.push_str(&format!(
                "Macros Removed: {}\n",
                summary.macros_removed.join(", ")
            ));
        }

        if !summary.files.is_empty() {
            let heading = if summary.dry_run { "Would write" } else { "Written" };
            output.push_str(&format!("\n{} ({}):\n", heading, summary.files.len()));
            for path in &summary.files {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }

        if let Some(error) = &summary.error {
            output.push_str(&format!("\nError: {}\n", error));
        }

        if !summary.orphaned.is_empty() {
            output.push_str(&format!(
                "\nWarning: {} file(s) were written before the run aborted:\n",
                summary.orphaned.len()
            ));
            for path in &summary.orphaned {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }

        output
    }
}
