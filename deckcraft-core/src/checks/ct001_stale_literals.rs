//! CT001: Stale marketing claims left in the deck

use super::{CheckCategory, DeckCheck};
use crate::finding::{Finding, FindingScope, Severity};
use crate::plan;
use crate::reader::Deck;
use anyhow::Result;

/// Every claim the targeted rewrites replace must be gone after editing
pub struct StaleLiteralsCheck;

impl DeckCheck for StaleLiteralsCheck {
    fn id(&self) -> &str {
        "CT001"
    }

    fn name(&self) -> &str {
        "Stale claims removed"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Content
    }

    fn check(&self, deck: &Deck) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for (index, slide) in deck.slides.iter().enumerate() {
            let text = slide.text();
            for literal in plan::stale_literals() {
                if text.contains(literal) {
                    findings.push(Finding::new(
                        self.id(),
                        FindingScope::Slide(index),
                        format!("Unreplaced claim still present: '{}'", literal),
                        Severity::Error,
                    ));
                }
            }
        }

        Ok(findings)
    }
}
