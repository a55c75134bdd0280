//! BR001: Residual old brand name detection

use super::{CheckCategory, DeckCheck};
use crate::finding::{Finding, FindingScope, Severity};
use crate::reader::Deck;
use anyhow::Result;
use regex::Regex;

pub struct ResidualBrandCheck {
    pattern: Regex,
}

impl ResidualBrandCheck {
    pub fn new() -> Self {
        Self {
            // Case-insensitive so FIXIT, Fixit and fixit.fr all count
            pattern: Regex::new(r"(?i)fixit").expect("valid brand pattern"),
        }
    }
}

impl Default for ResidualBrandCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckCheck for ResidualBrandCheck {
    fn id(&self) -> &str {
        "BR001"
    }

    fn name(&self) -> &str {
        "Residual old brand name"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Branding
    }

    fn check(&self, deck: &Deck) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for (index, slide) in deck.slides.iter().enumerate() {
            let mut hits = Vec::new();
            for run in slide.runs() {
                for m in self.pattern.find_iter(run) {
                    // The new brand embeds no old-brand substring, but an
                    // address like www.fixit.fr must still be caught
                    hits.push(m.as_str().to_string());
                }
            }
            if !hits.is_empty() {
                findings.push(Finding::new(
                    self.id(),
                    FindingScope::Slide(index),
                    format!(
                        "Found {} occurrence(s) of the old brand name: {}",
                        hits.len(),
                        hits.join(", ")
                    ),
                    Severity::Error,
                ));
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::deck_with_slides;

    #[test]
    fn test_residual_brand_detected_per_slide() {
        let deck = deck_with_slides(&[
            "VITFIX - Le Doctolib de l'artisanat",
            "AVANT FIXIT tout etait lent\nContact : partenariats@fixit.fr",
            "LA SOLUTION VITFIX",
        ]);

        let check = ResidualBrandCheck::new();
        let findings = check.check(&deck).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].check_id, "BR001");
        assert_eq!(findings[0].scope, FindingScope::Slide(1));
        assert!(findings[0].message.contains("2 occurrence(s)"));
    }

    #[test]
    fn test_new_brand_does_not_trigger() {
        let deck = deck_with_slides(&["VITFIX partout\nwww.vitfix.fr"]);
        let check = ResidualBrandCheck::new();
        assert!(check.check(&deck).unwrap().is_empty());
    }
}
