//! ST002: Reordered slide positions

use super::{CheckCategory, DeckCheck};
use crate::finding::{Finding, FindingScope, Severity};
use crate::plan;
use crate::reader::Deck;
use anyhow::Result;

/// Verifies the appended slides landed on their target positions by
/// looking for their title text at those deck indices
pub struct SlideOrderCheck;

impl DeckCheck for SlideOrderCheck {
    fn id(&self) -> &str {
        "ST002"
    }

    fn name(&self) -> &str {
        "Slide order"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Structure
    }

    fn check(&self, deck: &Deck) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for (position, title) in plan::expected_positions() {
            let Some(slide) = deck.slides.get(position) else {
                findings.push(Finding::new(
                    self.id(),
                    FindingScope::Deck,
                    format!(
                        "Expected '{}' at position {} but the deck only has {} slides",
                        title,
                        position + 1,
                        deck.slide_count()
                    ),
                    Severity::Error,
                ));
                continue;
            };

            if !slide.text().contains(title) {
                findings.push(Finding::new(
                    self.id(),
                    FindingScope::Slide(position),
                    format!("Expected '{}' at position {}", title, position + 1),
                    Severity::Error,
                ));
            }
        }

        Ok(findings)
    }
}
