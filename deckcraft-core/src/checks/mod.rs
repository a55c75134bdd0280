//! Deck verification check system

pub mod registry;

// Check implementations
pub mod br001_residual_brand;
pub mod br002_brand_present;
pub mod ct001_stale_literals;
pub mod ct002_updated_literals;
pub mod st001_slide_count;
pub mod st002_slide_order;

use crate::finding::Finding;
use crate::reader::Deck;
use anyhow::Result;

/// Trait that all verification checks must implement
pub trait DeckCheck: Send + Sync {
    /// Unique check identifier (e.g., "BR001")
    fn id(&self) -> &str;

    /// Human-readable check name
    fn name(&self) -> &str;

    /// Check category
    fn category(&self) -> CheckCategory;

    /// Inspect the deck for findings
    fn check(&self, deck: &Deck) -> Result<Vec<Finding>>;
}

/// Check categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCategory {
    Branding,
    Structure,
    Content,
}

impl CheckCategory {
    pub fn as_str(&self) -> &str {
        match self {
            CheckCategory::Branding => "Branding",
            CheckCategory::Structure => "Structure",
            CheckCategory::Content => "Content",
        }
    }
}
