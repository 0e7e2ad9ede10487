pub mod assemble;
pub mod io;
pub mod pipeline;
pub mod stream;

// Re-export key types for easier usage
pub use assemble::{Reassembler, normalize_blocks};
pub use stream::{BlockItem, BlockSink, LineItem, split_lines};
