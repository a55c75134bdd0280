//! BR002: New brand name presence

use super::{CheckCategory, DeckCheck};
use crate::finding::{Finding, FindingScope, Severity};
use crate::reader::Deck;
use anyhow::Result;
use regex::Regex;

pub struct BrandPresentCheck {
    pattern: Regex,
}

impl BrandPresentCheck {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?i)vitfix").expect("valid brand pattern"),
        }
    }
}

impl Default for BrandPresentCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckCheck for BrandPresentCheck {
    fn id(&self) -> &str {
        "BR002"
    }

    fn name(&self) -> &str {
        "New brand name present"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Branding
    }

    fn check(&self, deck: &Deck) -> Result<Vec<Finding>> {
        let found = deck
            .slides
            .iter()
            .flat_map(|slide| slide.runs())
            .any(|run| self.pattern.is_match(run));

        if found {
            Ok(Vec::new())
        } else {
            Ok(vec![Finding::new(
                self.id(),
                FindingScope::Deck,
                "The new brand name 'Vitfix' appears nowhere in the deck",
                Severity::Warning,
            )])
        }
    }
}
