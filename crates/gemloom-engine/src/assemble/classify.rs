use super::kinds::{CommentSpan, Fence, Indent, ListMarker, Sentence};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of reassembly: each line is judged on its own,
/// without reference to machine state. Which facts matter, and in what
/// order, is the machine's business.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whitespace-only line.
    pub blank: bool,
    /// Rewritten single-level entry when the line reads as a list entry.
    pub list_entry: Option<String>,
    /// The line's first three characters are a fence marker.
    pub fence_marker: bool,
    /// Line content with the four-space code indent removed.
    pub code: Option<String>,
    /// Contains a comment opener.
    pub opens_comment: bool,
    /// Contains a comment closer.
    pub closes_comment: bool,
    /// Non-empty and not sentence-final: wraps onto the next line.
    pub unterminated: bool,
    /// Empty or clause-final: ends a wrapped paragraph.
    pub sentence_break: bool,
}

/// Classifies a line into a [`LineClass`] of local facts.
pub fn classify(line: &str) -> LineClass {
    LineClass {
        blank: line.trim().is_empty(),
        list_entry: ListMarker::collapse(line),
        fence_marker: Fence::is_marker(line),
        code: Indent::strip(line).map(str::to_string),
        opens_comment: CommentSpan::opens(line),
        closes_comment: CommentSpan::closes(line),
        unterminated: Sentence::unterminated(line),
        sentence_break: Sentence::breaks(line),
    }
}
