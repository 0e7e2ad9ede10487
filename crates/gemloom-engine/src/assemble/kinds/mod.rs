pub mod comment;
pub mod fence;
pub mod list;
pub mod sentence;

pub use comment::CommentSpan;
pub use fence::{Fence, Indent};
pub use list::ListMarker;
pub use sentence::Sentence;
