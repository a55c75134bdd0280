//! CT002: Updated figures present in the deck

use super::{CheckCategory, DeckCheck};
use crate::finding::{Finding, FindingScope, Severity};
use crate::plan;
use crate::reader::Deck;
use anyhow::Result;

/// The key replacement figures must appear somewhere after editing
pub struct UpdatedLiteralsCheck;

impl DeckCheck for UpdatedLiteralsCheck {
    fn id(&self) -> &str {
        "CT002"
    }

    fn name(&self) -> &str {
        "Updated figures present"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Content
    }

    fn check(&self, deck: &Deck) -> Result<Vec<Finding>> {
        let text = deck.all_text();
        let mut findings = Vec::new();

        for literal in plan::updated_literals() {
            if !text.contains(literal) {
                findings.push(Finding::new(
                    self.id(),
                    FindingScope::Deck,
                    format!("Expected updated figure is missing: '{}'", literal),
                    Severity::Warning,
                ));
            }
        }

        Ok(findings)
    }
}
