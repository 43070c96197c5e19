// Edit a macro definition

use macrogen_config::is_valid_macro_name;
use macrogen_generation::MacroDefinition;

use super::{Command, CommandContext};
use crate::{
    error::{CliError, CliResult},
    output::{print_info, print_success, OutputStyle},
};

/// New value for a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetValue {
    /// Switch to a scalar value
    Scalar(String),
    /// Switch to a list of batch values
    Batch(Vec<String>),
}

/// Set the value of one macro
///
/// Only the active half of the definition changes: setting a scalar keeps
/// the old batch list around, and vice versa, so toggling back is lossless.
pub struct SetCommand {
    pub context: CommandContext,
    pub name: String,
    pub value: SetValue,
}

impl SetCommand {
    pub fn new(context: CommandContext, name: String, value: SetValue) -> Self {
        Self {
            context,
            name,
            value,
        }
    }

    /// Apply the change and persist it, returning the updated definition
    pub fn run(&self) -> CliResult<MacroDefinition> {
        if !is_valid_macro_name(&self.name) {
            return Err(CliError::InvalidArgument {
                message: format!(
                    "'{}' is not a macro name; use upper-case letters and underscores",
                    self.name
                ),
            });
        }

        let (manager, mut config) = self.context.load()?;
        let mut definition = config
            .find_macro(&self.name)
            .cloned()
            .unwrap_or_else(|| MacroDefinition::scalar(self.name.as_str(), ""));

        match &self.value {
            SetValue::Scalar(value) => {
                definition.is_scalar = true;
                definition.value = value.clone();
            }
            SetValue::Batch(values) => {
                definition.is_scalar = false;
                definition.batch_values = values.clone();
            }
        }

        config.upsert_macro(definition.clone());
        self.context.persist(&manager, &config)?;
        Ok(definition)
    }
}

impl Command for SetCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let definition = self.run()?;

        let shown = match &self.value {
            SetValue::Scalar(value) => format!("{:?}", value),
            SetValue::Batch(values) => format!("[{}]", values.join(", ")),
        };
        print_success(&format!("Set {} = {}", style.code(&definition.name), shown));
        if self.context.dry_run {
            print_info("Dry run: configuration not saved");
        }
        Ok(())
    }
}
