//! ST001: Slide count after edits

use super::{CheckCategory, DeckCheck};
use crate::config::CheckerConfig;
use crate::finding::{Finding, FindingScope, Severity};
use crate::plan;
use crate::reader::Deck;
use anyhow::Result;

pub struct SlideCountCheck {
    expected: usize,
}

impl SlideCountCheck {
    pub fn new(config: &CheckerConfig) -> Self {
        let expected = config
            .get_param_int("expected_slides")
            .map(|v| v as usize)
            .unwrap_or(plan::EXPECTED_INPUT_SLIDES + plan::NEW_SLIDE_COUNT);
        Self { expected }
    }
}

impl DeckCheck for SlideCountCheck {
    fn id(&self) -> &str {
        "ST001"
    }

    fn name(&self) -> &str {
        "Slide count"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Structure
    }

    fn check(&self, deck: &Deck) -> Result<Vec<Finding>> {
        let actual = deck.slide_count();
        if actual == self.expected {
            return Ok(Vec::new());
        }

        Ok(vec![Finding::new(
            self.id(),
            FindingScope::Deck,
            format!("Deck has {} slides, expected {}", actual, self.expected),
            Severity::Error,
        )])
    }
}
