//! Reader and writer adapters around the stream types.

use std::io::{Read, Write};

use thiserror::Error;

use crate::stream::{BlockItem, LineItem, split_lines};

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read source text: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write block output: {0}")]
    Write(#[source] std::io::Error),
}

/// Reads a whole source into indexed line items. The input must be
/// valid UTF-8.
pub fn read_lines<R: Read>(mut from: R) -> Result<Vec<LineItem>, IoError> {
    let mut text = String::new();
    from.read_to_string(&mut text).map_err(IoError::Read)?;
    Ok(split_lines(&text))
}

/// Drains reassembled blocks into a writer, returning how many blocks
/// were written. Accepts any block iterator, channel receivers included.
pub fn write_blocks<W: Write>(
    blocks: impl IntoIterator<Item = BlockItem>,
    to: &mut W,
) -> Result<usize, IoError> {
    let mut written = 0;
    for block in blocks {
        to.write_all(block.text.as_bytes())
            .map_err(IoError::Write)?;
        written += 1;
    }
    to.flush().map_err(IoError::Write)?;
    Ok(written)
}
