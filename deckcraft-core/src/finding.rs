//! Verification findings with hierarchical structure

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Severity level of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Scope of a finding (deck or slide level)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingScope {
    /// Deck-level finding
    Deck,
    /// Slide-level finding, 0-based position in deck order
    Slide(usize),
}

impl FindingScope {
    /// Get the slide index if this is a slide scope
    pub fn slide_index(&self) -> Option<usize> {
        match self {
            FindingScope::Deck => None,
            FindingScope::Slide(index) => Some(*index),
        }
    }
}

impl PartialOrd for FindingScope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FindingScope {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FindingScope::Deck, FindingScope::Deck) => Ordering::Equal,
            (FindingScope::Deck, _) => Ordering::Less,
            (_, FindingScope::Deck) => Ordering::Greater,
            (FindingScope::Slide(a), FindingScope::Slide(b)) => a.cmp(b),
        }
    }
}

/// A verification finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Check ID (e.g., "BR001")
    pub check_id: String,
    /// Scope of the finding
    pub scope: FindingScope,
    /// Human-readable message
    pub message: String,
    /// Severity level
    pub severity: Severity,
}

impl Finding {
    pub fn new(
        check_id: impl Into<String>,
        scope: FindingScope,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            scope,
            message: message.into(),
            severity,
        }
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Finding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scope
            .cmp(&other.scope)
            .then_with(|| self.check_id.cmp(&other.check_id))
    }
}
