// List macro definitions

use macrogen_generation::{GeneratorConfig, MacroValue};

use super::{Command, CommandContext};
use crate::{
    error::{CliError, CliResult},
    output::{print_info, OutputStyle},
};

/// Show every macro definition with its active value
pub struct MacrosCommand {
    pub context: CommandContext,
    pub json: bool,
}

impl MacrosCommand {
    pub fn new(context: CommandContext) -> Self {
        Self {
            context,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// One line per definition, in configuration order
    pub fn render(style: &OutputStyle, config: &GeneratorConfig) -> Vec<String> {
        config
            .macros
            .iter()
            .map(|definition| {
                let value = match definition.kind() {
                    MacroValue::Scalar("") => style.dimmed("(unset)"),
                    MacroValue::Scalar(value) => format!("{:?}", value),
                    MacroValue::Batch(values) => {
                        format!("[{}] (batch of {})", values.join(", "), values.len())
                    }
                };
                format!("  {} = {}", style.code(&definition.name), value)
            })
            .collect()
    }
}

impl Command for MacrosCommand {
    fn execute(&self) -> CliResult<()> {
        let (_, config) = self.context.load()?;

        if self.json {
            let json = serde_json::to_string_pretty(&config.macros)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", json);
            return Ok(());
        }

        if config.macros.is_empty() {
            print_info("No macros defined. Run 'macrogen sync' to collect them from the templates.");
            return Ok(());
        }

        let style = OutputStyle::default();

        println!("{}", style.header(&format!("Macros ({})", config.macros.len())));
        for line in Self::render(&style, &config) {
            println!("{}", line);
        }
        Ok(())
    }
}
