//! Output formatters for findings

use anyhow::Result;
use colored::*;
use deckcraft_core::{Finding, FindingScope, Severity};
use std::collections::BTreeMap;
use std::path::Path;

/// Print findings in human-readable format with colors and hierarchy
pub fn print_human(file_path: &Path, findings: &[Finding]) {
    println!("{}", format!("Verifying: {}", file_path.display()).bold());
    println!();

    if findings.is_empty() {
        println!("{}", "✓ No findings!".green().bold());
        return;
    }

    // Group findings by scope for hierarchical display
    let mut deck_findings = Vec::new();
    let mut slide_findings: BTreeMap<usize, Vec<&Finding>> = BTreeMap::new();

    for finding in findings {
        match &finding.scope {
            FindingScope::Deck => deck_findings.push(finding),
            FindingScope::Slide(index) => {
                slide_findings.entry(*index).or_default().push(finding);
            }
        }
    }

    // Print deck-level findings
    if !deck_findings.is_empty() {
        println!("{}", "Deck-level findings:".bold().underline());
        for finding in deck_findings {
            print_finding(finding, 1);
        }
        println!();
    }

    // Print slide-level findings
    for (index, findings) in &slide_findings {
        println!(
            "{} {}",
            "Slide:".bold(),
            format!("{}", index + 1).cyan().bold()
        );
        for finding in findings {
            print_finding(finding, 1);
        }
        println!();
    }

    // Print summary
    let error_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warning_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .count();
    let info_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Info)
        .count();

    println!("{}", "Summary:".bold().underline());
    if error_count > 0 {
        println!("  {} {}", "Errors:".red().bold(), error_count);
    }
    if warning_count > 0 {
        println!("  {} {}", "Warnings:".yellow().bold(), warning_count);
    }
    if info_count > 0 {
        println!("  {} {}", "Info:".blue().bold(), info_count);
    }
}

fn print_finding(finding: &Finding, indent: usize) {
    let indent_str = "  ".repeat(indent);
    let severity_str = match finding.severity {
        Severity::Error => "ERROR".red().bold(),
        Severity::Warning => "WARN".yellow().bold(),
        Severity::Info => "INFO".blue().bold(),
    };

    println!(
        "{}{} [{}] {}",
        indent_str,
        severity_str,
        finding.check_id.bright_black(),
        finding.message
    );
}

/// Print findings in JSON format
pub fn print_json(file_path: &Path, findings: &[Finding]) -> Result<()> {
    let output = serde_json::json!({
        "file": file_path.display().to_string(),
        "findings": findings,
        "summary": {
            "total": findings.len(),
            "errors": findings.iter().filter(|f| f.severity == Severity::Error).count(),
            "warnings": findings.iter().filter(|f| f.severity == Severity::Warning).count(),
            "info": findings.iter().filter(|f| f.severity == Severity::Info).count(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
