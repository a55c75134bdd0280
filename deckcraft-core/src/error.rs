//! Structural package errors

use thiserror::Error;

/// Errors describing a structurally unusable or inconsistent package
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("missing package part: {0}")]
    MissingPart(String),

    #[error("slide relationship '{0}' not found in presentation relationships")]
    MissingSlideRel(String),

    #[error("invalid slide order: {0}")]
    InvalidOrder(String),

    #[error("targeted rewrite references slide index {index} but the deck has {count} slides")]
    RewriteOutOfRange { index: usize, count: usize },
}
