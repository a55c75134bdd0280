use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deckcraft_core::{Checker, CheckerConfig, Severity};
use std::path::PathBuf;

mod formatter;

#[derive(Parser)]
#[command(name = "deckcheck")]
#[command(about = "PPTX deck verifier with hierarchical finding reporting", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the PPTX file to verify
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Show only errors (hide warnings and info)
    #[arg(short, long)]
    errors_only: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output for CI/CD integration
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CheckerConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("deckcheck.toml");
        if default_config_path.exists() {
            CheckerConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            CheckerConfig::default()
        }
    };

    // Validate configuration
    let valid_tokens = deckcraft_core::checks::registry::get_all_valid_tokens();
    config
        .validate_checks(&valid_tokens)
        .context("Invalid configuration")?;

    // Create checker and run
    let checker = Checker::with_config(config);

    let findings = checker
        .check_file(&cli.file)
        .with_context(|| format!("Failed to verify file: {}", cli.file.display()))?;

    // Filter findings if needed
    let findings: Vec<_> = if cli.errors_only {
        findings
            .into_iter()
            .filter(|f| f.severity == Severity::Error)
            .collect()
    } else {
        findings
    };

    // Output results
    match cli.format {
        OutputFormat::Human => {
            formatter::print_human(&cli.file, &findings);
        }
        OutputFormat::Json => {
            formatter::print_json(&cli.file, &findings)?;
        }
    }

    // Exit with appropriate code
    let exit_code = if findings.iter().any(|f| f.severity == Severity::Error) {
        1
    } else {
        0 // Only warnings or clean, still exit 0
    };

    std::process::exit(exit_code);
}
