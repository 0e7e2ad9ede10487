//! Items passed between pipeline stages.

use std::sync::mpsc::SyncSender;

/// One source line, with its line terminator already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Position of the line in its source. Informational only: the
    /// reassembly core never interprets it.
    pub index: usize,
    pub text: String,
}

impl LineItem {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// One reassembled block: a paragraph, list group, or code region.
///
/// `text` ends in exactly one `\n`. Indices start at 0 and increment by
/// one per emitted block, independent of the input line numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockItem {
    pub index: usize,
    pub text: String,
}

impl BlockItem {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Splits a text buffer into indexed line items.
///
/// `str::lines` semantics: `\n` and `\r\n` terminators are both stripped,
/// and a trailing terminator does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<LineItem> {
    text.lines()
        .enumerate()
        .map(|(index, line)| LineItem::new(index, line))
        .collect()
}

/// Destination for reassembled blocks.
///
/// `accept` reports whether the consumer is still there; once it returns
/// `false` the producer stops handing blocks over.
pub trait BlockSink {
    fn accept(&mut self, block: BlockItem) -> bool;
}

/// Collects blocks in memory. Never disconnects.
impl BlockSink for Vec<BlockItem> {
    fn accept(&mut self, block: BlockItem) -> bool {
        self.push(block);
        true
    }
}

/// Rendezvous handoff to the next pipeline stage: blocks until the
/// receiver takes the item. A dropped receiver reads as disconnection.
impl BlockSink for SyncSender<BlockItem> {
    fn accept(&mut self, block: BlockItem) -> bool {
        self.send(block).is_ok()
    }
}
