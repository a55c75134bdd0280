//! Check registry for managing and creating check instances

use super::*;
use crate::config::CheckerConfig;
use std::collections::HashSet;

/// Get all valid configuration tokens (check IDs, category prefixes, "ALL")
pub fn get_all_valid_tokens() -> HashSet<String> {
    let mut tokens = HashSet::new();
    tokens.insert("ALL".to_string());

    // Category prefixes
    let prefixes = ["BR", "ST", "CT"];
    for prefix in prefixes {
        tokens.insert(prefix.to_string());
    }

    // Check IDs
    let config = CheckerConfig::default();
    let checks = create_all_checks(&config);
    for check in checks {
        tokens.insert(check.id().to_string());
    }

    tokens
}

/// Create all enabled checks based on configuration
pub fn create_enabled_checks(config: &CheckerConfig) -> Vec<Box<dyn DeckCheck>> {
    create_all_checks(config)
        .into_iter()
        .filter(|check| config.is_check_enabled(check.id()))
        .collect()
}

/// Create instances of all available checks
fn create_all_checks(config: &CheckerConfig) -> Vec<Box<dyn DeckCheck>> {
    vec![
        Box::new(br001_residual_brand::ResidualBrandCheck::new()),
        Box::new(br002_brand_present::BrandPresentCheck::new()),
        Box::new(st001_slide_count::SlideCountCheck::new(config)),
        Box::new(st002_slide_order::SlideOrderCheck),
        Box::new(ct001_stale_literals::StaleLiteralsCheck),
        Box::new(ct002_updated_literals::UpdatedLiteralsCheck),
    ]
}
