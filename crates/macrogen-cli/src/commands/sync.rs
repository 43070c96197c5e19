// Reconcile macro definitions with the templates

use macrogen_generation::{GenerationManager, ReconcileSummary};

use super::{Command, CommandContext};
use crate::{
    error::CliResult,
    output::{print_info, print_success, OutputStyle},
};

/// Add macros the templates need and drop the ones they no longer use
pub struct SyncCommand {
    pub context: CommandContext,
}

impl SyncCommand {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Reconcile and persist, returning what changed
    pub fn run(&self) -> CliResult<ReconcileSummary> {
        let (manager, mut config) = self.context.load()?;
        let mut anchored = manager.anchored(&config);

        let summary = GenerationManager::new().sync_macros(&mut anchored)?;

        if !summary.is_unchanged() {
            config.macros = anchored.macros;
            self.context.persist(&manager, &config)?;
        }
        Ok(summary)
    }
}

impl Command for SyncCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let summary = self.run()?;

        if summary.is_unchanged() {
            print_success("Macros already match the templates");
            return Ok(());
        }

        for name in &summary.added {
            println!("  {} {}", style.success("added"), style.code(name));
        }
        for name in &summary.removed {
            println!("  {} {}", style.warning("removed"), style.code(name));
        }
        if self.context.dry_run {
            print_info("Dry run: configuration not saved");
        }
        Ok(())
    }
}
