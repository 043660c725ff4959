use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ModelConfig;
use crate::generator::{generate, TemplateSet};
use crate::wizard;

/// Command-line interface for kitgen
///
/// Scaffolds a go-kit service layer from an interactive wizard or a model
/// description file.
#[derive(Parser)]
#[command(name = "kitgen")]
#[command(about = "go-kit service scaffolding CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate model, repository, service, endpoints, transports and tests
    Model {
        /// Path to a model description file (YAML or JSON); skips the wizard
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Root directory for generated files
        #[arg(short, long, default_value = "./")]
        output: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The model description cannot be loaded or is invalid
/// - The wizard input cannot be read or leaves the model name empty
/// - Any generation step fails
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Model { config, output } => {
            let mut model_config = match config {
                Some(path) => ModelConfig::from_file(path)?,
                None => wizard::run_wizard()?,
            };
            model_config.output_path = output.clone();

            let templates = TemplateSet::new()?;
            let out = generate(&templates, &model_config)?;
            println!("✅ Code generated successfully in {}", out.display());
            Ok(())
        }
    }
}
