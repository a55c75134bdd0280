use anyhow::{Context, Result};
use clap::Parser;
use deckcraft_core::{apply_edits, plan, CheckerConfig, DeckEdits};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckcli")]
#[command(about = "CLI tools for DeckCraft", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the PPTX file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to configuration file (TOML) with extra replacements
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output file (required unless --dry-run)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip appending the new data slides
    #[arg(long)]
    no_new_slides: bool,

    /// Skip reordering the deck
    #[arg(long)]
    no_reorder: bool,

    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut edits = plan::investor_refresh();

    if let Some(config_path) = &cli.config {
        let config = CheckerConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        for rule in config.replacements {
            edits.replacements.push((rule.from, rule.to));
        }
    }

    if cli.no_new_slides {
        edits.new_slides.clear();
        // The built-in order permutes the appended slides too
        edits.slide_order = None;
    }
    if cli.no_reorder {
        edits.slide_order = None;
    }

    if cli.dry_run {
        print_dry_run(&cli.file, &edits);
        return Ok(());
    }

    // Enforce output file for destructive operations
    let Some(output_path) = cli.output else {
        anyhow::bail!("Output file is required. Use --output <FILE>.");
    };

    println!("Editing '{}'...", cli.file.display());
    let summary = apply_edits(&cli.file, &output_path, &edits)
        .with_context(|| "Failed to edit presentation")?;

    println!("✓ Successfully edited presentation");
    println!("  Runs replaced: {}", summary.runs_replaced);
    println!("  Runs rewritten: {}", summary.runs_rewritten);
    println!("  Slides added: {}", summary.slides_added);
    if summary.reordered {
        println!("  Deck reordered");
    }
    println!("Output: {}", output_path.display());

    Ok(())
}

fn print_dry_run(file: &PathBuf, edits: &DeckEdits) {
    println!("[DRY RUN] Operations on '{}':", file.display());

    if !edits.replacements.is_empty() {
        println!("  Replacing text ({} rules):", edits.replacements.len());
        for (from, to) in &edits.replacements {
            println!("    - '{}' -> '{}'", from, to);
        }
    }

    if !edits.run_rewrites.is_empty() {
        println!("  Rewriting runs:");
        for (slide_index, rewrites) in &edits.run_rewrites {
            println!("    - slide {}: {} rewrite(s)", slide_index + 1, rewrites.len());
        }
    }

    if !edits.new_slides.is_empty() {
        println!("  Appending {} new slide(s)", edits.new_slides.len());
    }

    if let Some(order) = &edits.slide_order {
        println!("  Reordering {} slides", order.len());
    }
}
