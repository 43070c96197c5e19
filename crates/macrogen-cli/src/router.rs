// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::error::{CliError, CliResult};

/// macrogen - generate files from $MACRO$ templates
#[derive(Parser, Debug)]
#[command(name = "macrogen")]
#[command(bin_name = "macrogen")]
#[command(about = "Generate files from $MACRO$ templates")]
#[command(
    long_about = "macrogen scans a directory of *.txt templates whose first line is\n'###<output path>', substitutes $NAME$ and $NAME.MODIFIER$ tokens, and writes\none file per template (or one per batch value).\n\nQuick start:\n  • macrogen sync              Collect the macros the templates use\n  • macrogen set NAME value    Give a macro a value\n  • macrogen generate          Write the generated files"
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: ./macrogen.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview changes without applying them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate files from the templates
    #[command(about = "Reconcile macros, then generate files from every template")]
    Generate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reconcile macro definitions with the templates
    #[command(about = "Add macros the templates use and remove the ones they no longer use")]
    Sync,

    /// List macro definitions
    #[command(about = "List macro definitions and their values")]
    Macros {
        /// Print the definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a macro value
    #[command(about = "Set a scalar value, or a comma-separated batch with --batch")]
    Set {
        /// Macro name, e.g. NAME
        #[arg(value_name = "NAME")]
        name: String,

        /// Scalar value
        #[arg(value_name = "VALUE", required_unless_present = "batch", conflicts_with = "batch")]
        value: Option<String>,

        /// Batch values, one generated file set per value
        #[arg(long, value_name = "V1,V2,...", value_delimiter = ',', num_args = 1..)]
        batch: Option<Vec<String>>,
    },

    /// Show the effective configuration
    #[command(about = "Show configuration file, directories and macro counts")]
    Config,
}

/// Parses arguments and dispatches to command handlers
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();

        // Initialize logging based on CLI flags
        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli)
    }

    /// Execute a command
    pub fn execute(cli: &Cli) -> CliResult<()> {
        let context = CommandContext::new(cli.config.clone(), cli.dry_run);

        match &cli.command {
            Commands::Generate { json } => {
                let format = if *json {
                    ReportFormat::Json
                } else {
                    ReportFormat::Text
                };
                GenerateCommand::new(context).with_format(format).execute()
            }
            Commands::Sync => SyncCommand::new(context).execute(),
            Commands::Macros { json } => MacrosCommand::new(context).with_json(*json).execute(),
            Commands::Set { name, value, batch } => {
                let value = match (value, batch) {
                    (Some(value), None) => SetValue::Scalar(value.clone()),
                    (None, Some(values)) => SetValue::Batch(values.clone()),
                    _ => {
                        return Err(CliError::InvalidArgument {
                            message: "give either VALUE or --batch".to_string(),
                        })
                    }
                };
                SetCommand::new(context, name.clone(), value).execute()
            }
            Commands::Config => ConfigCommand::new(context).execute(),
        }
    }
}
