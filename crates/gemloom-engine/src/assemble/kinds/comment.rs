/// HTML comment delimiters. While a span is open, block handoffs are
/// held back so the whole comment travels in one block.
pub struct CommentSpan;

impl CommentSpan {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";

    pub fn opens(line: &str) -> bool {
        line.contains(Self::OPEN)
    }

    pub fn closes(line: &str) -> bool {
        line.contains(Self::CLOSE)
    }
}
