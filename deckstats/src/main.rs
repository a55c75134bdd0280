use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deckcraft_core::reader;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckstats")]
#[command(about = "Statistics generator for DeckCraft")]
#[command(version)]
struct Cli {
    /// Path to the PPTX file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[derive(Serialize)]
struct FileStats {
    total_slides: usize,
    total_file_size: u64,
    slide_width: i64,
    slide_height: i64,
    slide_sizes: Vec<SlideSize>,
    text_stats: Vec<TextStats>,
}

#[derive(Serialize)]
struct SlideSize {
    position: usize,
    part_name: String,
    compressed_size: u64,
    percentage: f64,
}

#[derive(Serialize)]
struct TextStats {
    position: usize,
    shape_count: usize,
    run_count: usize,
    char_count: usize,
    percentage: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let deck = reader::read_deck(&cli.file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;

    let total_file_size = std::fs::metadata(&cli.file)
        .with_context(|| "Failed to get file size")?
        .len();

    let slide_sizes = calculate_slide_sizes(&cli.file, total_file_size, &deck)?;
    let text_stats = calculate_text_stats(&deck);

    let stats = FileStats {
        total_slides: deck.slide_count(),
        total_file_size,
        slide_width: deck.slide_width,
        slide_height: deck.slide_height,
        slide_sizes,
        text_stats,
    };

    match cli.format {
        OutputFormat::Human => print_human(&stats),
        OutputFormat::Json => print_json(&stats)?,
    }

    Ok(())
}

fn calculate_text_stats(deck: &reader::Deck) -> Vec<TextStats> {
    let mut total_chars = 0usize;
    let mut per_slide: Vec<(usize, usize, usize)> = Vec::new();

    for slide in &deck.slides {
        let char_count: usize = slide.runs().map(|run| run.chars().count()).sum();
        total_chars += char_count;
        per_slide.push((slide.shape_count(), slide.run_count(), char_count));
    }

    per_slide
        .into_iter()
        .enumerate()
        .map(|(position, (shape_count, run_count, char_count))| TextStats {
            position: position + 1,
            shape_count,
            run_count,
            char_count,
            percentage: if total_chars > 0 {
                (char_count as f64 / total_chars as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

fn calculate_slide_sizes(
    file_path: &PathBuf,
    total_size: u64,
    deck: &reader::Deck,
) -> Result<Vec<SlideSize>> {
    use std::fs::File;
    use std::io::BufReader;
    use zip::ZipArchive;

    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let mut archive = ZipArchive::new(reader)?;

    let mut slide_sizes = Vec::new();

    // Compressed entry sizes, reported in deck order rather than zip order
    for (position, slide) in deck.slides.iter().enumerate() {
        let entry = archive.by_name(&slide.part_name)?;
        let compressed_size = entry.compressed_size();
        let percentage = (compressed_size as f64 / total_size as f64) * 100.0;

        slide_sizes.push(SlideSize {
            position: position + 1,
            part_name: slide.part_name.clone(),
            compressed_size,
            percentage,
        });
    }

    Ok(slide_sizes)
}

fn humanize_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

fn print_human(stats: &FileStats) {
    println!("File Statistics:");
    println!("  Total Slides: {}", stats.total_slides);
    println!(
        "  Slide Size: {} x {} EMU",
        stats.slide_width, stats.slide_height
    );
    println!(
        "  Total File Size: {}",
        humanize_size(stats.total_file_size)
    );

    if !stats.slide_sizes.is_empty() {
        println!("\nSlide Sizes (compressed):");
        for slide in &stats.slide_sizes {
            println!(
                "  Slide {}: {} ({:.2}%)",
                slide.position,
                humanize_size(slide.compressed_size),
                slide.percentage
            );
        }
    }

    if !stats.text_stats.is_empty() {
        println!("\nText by Slide:");
        for stat in &stats.text_stats {
            println!(
                "  Slide {}: {} shapes, {} runs, {} chars ({:.2}%)",
                stat.position, stat.shape_count, stat.run_count, stat.char_count, stat.percentage
            );
        }
    }
}

fn print_json(stats: &FileStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    println!("{}", json);
    Ok(())
}
