//! # Block Reassembly
//!
//! Rebuilds renderer-ready blocks from a stream of raw Markdown lines:
//! wrapped sentences join into one paragraph, nested list entries
//! collapse to a single level, indented code gains explicit fences, and
//! blocks come out one per handoff.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line is reduced to a
//!    `LineClass` of local facts (blank status, list entry rewrite,
//!    fence marker, code indent, comment markers, sentence shape)
//!
//! 2. **Reassembly** (`machine`): a `Reassembler` dispatches each line
//!    on its current state, accumulates block text, and hands finished
//!    blocks to a `BlockSink`
//!
//! ## Modules
//!
//! - **`kinds`**: construct-specific knowledge with owned delimiters
//!   (ListMarker, Fence, Indent, CommentSpan, Sentence)
//! - **`classify`**: `classify` produces a `LineClass` per line
//! - **`machine`**: the five-state `Reassembler`
//!
//! ## Key Invariants
//!
//! - Every line lands in some block (rewritten where the construct asks
//!   for it); only blank lines between blocks are dropped
//! - Fence bodies are raw zones: no reclassification inside
//! - Block indices are contiguous from 0, in emission order
//! - End of input flushes everything still buffered

pub mod classify;
pub mod kinds;
pub mod machine;


pub use classify::{LineClass, classify};
pub use machine::Reassembler;

use crate::stream::{BlockItem, split_lines};

/// Convenience: reassembles a whole text buffer into blocks.
pub fn normalize_blocks(text: &str) -> Vec<BlockItem> {
    let mut machine = Reassembler::new(Vec::new());
    for line in split_lines(text) {
        machine.push_line(&line.text);
    }
    machine.finish()
}
