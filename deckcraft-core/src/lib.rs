//! deckcraft-core: Library for editing and verifying PPTX decks
//!
//! This library provides a streaming PPTX editing engine (rebranding,
//! targeted text rewrites, slide synthesis and reordering) together with
//! a verification framework that reports hierarchical findings.

pub mod checks;
pub mod config;
pub mod error;
pub mod finding;
pub mod plan;
pub mod reader;
pub mod slides;
pub mod writer;

use anyhow::Result;
use std::path::Path;

pub use checks::DeckCheck;
pub use config::CheckerConfig;
pub use finding::{Finding, FindingScope, Severity};
pub use writer::{apply_edits, DeckEdits, EditSummary, RunRewrite};

/// Main deck verification interface
pub struct Checker {
    checks: Vec<Box<dyn DeckCheck>>,
}

impl Checker {
    /// Create a new checker with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    /// Create a new checker with custom configuration
    pub fn with_config(config: CheckerConfig) -> Self {
        let checks = checks::registry::create_enabled_checks(&config);
        Self { checks }
    }

    /// Verify a deck file and return findings
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Finding>> {
        let deck = reader::read_deck(path)?;
        let mut findings = Vec::new();

        for check in &self.checks {
            findings.extend(check.check(&deck)?);
        }

        // Sort findings by scope for hierarchical reporting
        findings.sort();

        Ok(findings)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
