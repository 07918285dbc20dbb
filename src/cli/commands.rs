use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{auto_detect_config_path, load_config, GeneratorConfig};
use crate::context::Context;
use crate::generator::{format_go_file, generate, inspect, write_output, WriteOutcome};
use crate::logging::{init_logging, LogConfig};
use crate::model::load_model;

/// Command-line interface for iotagen
///
/// Generates Go service scaffolding from parsed interface definitions.
#[derive(Parser)]
#[command(name = "iotagen")]
#[command(about = "Iota service scaffold generator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overrides IOTAGEN_LOG_LEVEL)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Model, configuration and interface selection shared by all commands
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Path to the parsed interface model (YAML or JSON)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Generator config (YAML, JSON or TOML). Defaults to iotagen.yaml next to the model
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Package name for the generated file
    #[arg(long)]
    pub package: Option<String>,

    /// Generate the named interface (repeatable)
    #[arg(long = "name", value_name = "INTERFACE")]
    pub names: Vec<String>,

    /// Generate interfaces carrying this role annotation (repeatable)
    #[arg(long = "type", value_name = "ROLE")]
    pub types: Vec<String>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate service scaffolding for a model
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output file; the scaffold is printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Run gofmt on the written file
        #[arg(long, default_value_t = false)]
        fmt: bool,
    },
    /// Show interface selection, stub status and computed imports
    Inspect {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

impl SelectionArgs {
    /// Load the config file (explicit or auto-detected) and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<GeneratorConfig> {
        let path = self
            .config
            .clone()
            .or_else(|| auto_detect_config_path(&self.model));
        let mut config = match path {
            Some(path) => {
                tracing::debug!(config = %path.display(), "loading generator config");
                load_config(&path)?
            }
            None => GeneratorConfig::default(),
        };
        if let Some(package) = &self.package {
            config.package = Some(package.clone());
        }
        for name in &self.names {
            if !config.names.contains(name) {
                config.names.push(name.clone());
            }
        }
        for ty in &self.types {
            if !config.types.contains(ty) {
                config.types.push(ty.clone());
            }
        }
        Ok(config)
    }
}

/// Parse the process arguments and execute the selected command
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    init_logging(&log_config)?;
    execute(&cli)
}

/// Execute a parsed command
///
/// # Errors
///
/// Returns an error if the model or config cannot be loaded, rendering fails, or the
/// output cannot be written or formatted.
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            selection,
            output,
            force,
            dry_run,
            fmt,
        } => {
            let ns = load_model(&selection.model)?;
            let config = selection.resolve_config()?;
            let source = generate(&config, &ns)?;
            match output {
                None => print!("{source}"),
                Some(path) => {
                    let outcome = write_output(path, &source, *force, *dry_run)?;
                    if *fmt && outcome == WriteOutcome::Written {
                        format_go_file(path)
                            .with_context(|| format!("Failed to format {}", path.display()))?;
                    }
                }
            }
            Ok(())
        }
        Commands::Inspect { selection, json } => {
            let ns = load_model(&selection.model)?;
            let config = selection.resolve_config()?;
            let report = inspect(&Context::new(&config, &ns));
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
    }
}
