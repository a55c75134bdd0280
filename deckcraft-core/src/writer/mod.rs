//! Streaming PPTX modification

mod pptx_writer;

pub use pptx_writer::{apply_edits, DeckEdits, EditSummary, RunRewrite};
