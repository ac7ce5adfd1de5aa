use clap::{command, Parser};
use gantry_params::{
    DefaultDiagnosticFormatter, DiagnosticFormatter, FormatOptions, InMemoryConfigSource,
    StepDescriptor, StepValidator, ValidationError,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Checks a step descriptor against configuration the way the orchestrator
/// would before executing the goal, and prints the diagnostic it would show.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the step descriptor JSON
    #[arg(short, long)]
    step: PathBuf,

    /// Path to the explicit configuration JSON (flat object of key -> value)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the build-context properties JSON (nested object)
    #[arg(short, long)]
    properties: Option<PathBuf>,

    /// Describe expression fallbacks in the diagnostic
    #[arg(long)]
    expressions: bool,

    /// Colorize the diagnostic
    #[arg(long)]
    color: bool,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {} file: {}", what, e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {} file: {}", what, e))
}

/// Returns whether the step validated cleanly.
fn run(cli: &Cli) -> Result<bool, String> {
    let step: StepDescriptor = read_json(&cli.step, "step descriptor")?;

    let mut source = InMemoryConfigSource::new();
    if let Some(path) = &cli.config {
        source = source.with_configuration(read_json(path, "configuration")?);
    }
    if let Some(path) = &cli.properties {
        source = source.with_properties(read_json(path, "properties")?);
    }

    debug!("validating step '{}'", step.qualified_goal());

    match StepValidator::new().validate(&step, &source) {
        Ok(()) => {
            println!(
                "All required parameters of '{}' resolve.",
                step.qualified_goal()
            );
            Ok(true)
        }
        Err(ValidationError::MissingOrInvalidParameters(failure)) => {
            let options = FormatOptions {
                include_expressions: cli.expressions,
                use_color: cli.color,
            };
            print!(
                "{}",
                DefaultDiagnosticFormatter.format_failure(&failure, &options)
            );
            Ok(false)
        }
        Err(ValidationError::Source(err)) => Err(err.to_string()),
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
