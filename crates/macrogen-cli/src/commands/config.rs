// Show the effective configuration

use macrogen_generation::ResolvedPaths;

use super::{Command, CommandContext};
use crate::{error::CliResult, output::OutputStyle};

/// Print where configuration, templates and output live
pub struct ConfigCommand {
    pub context: CommandContext,
}

impl ConfigCommand {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Key-value lines describing the effective configuration
    pub fn render(&self, style: &OutputStyle) -> CliResult<Vec<String>> {
        let (manager, config) = self.context.load()?;
        let resolved = ResolvedPaths::from_config(&manager.anchored(&config))?;

        let config_file = if manager.config_path().exists() {
            manager.config_path().display().to_string()
        } else {
            format!("{} (not found, using defaults)", manager.config_path().display())
        };

        let unset = config
            .macros
            .iter()
            .filter(|m| m.is_scalar && m.value.is_empty())
            .count();

        Ok(vec![
            style.key_value("Config file", &config_file),
            style.key_value(
                "Environment prefix",
                &format!("{}_", manager.env_prefix()),
            ),
            style.key_value("Project root", &resolved.project_root.display().to_string()),
            style.key_value("Templates", &resolved.templates_dir.display().to_string()),
            style.key_value("Output", &resolved.output_dir.display().to_string()),
            style.key_value(
                "Macros",
                &format!("{} defined, {} unset", config.macros.len(), unset),
            ),
        ])
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        println!("{}", style.header("macrogen configuration"));
        for line in self.render(&style)? {
            println!("{}", line);
        }
        Ok(())
    }
}
