/// Explicit code fence delimiter.
pub struct Fence;

impl Fence {
    pub const MARKER: &'static str = "```";

    /// True when the line's first three characters are the fence marker.
    /// Opening annotations (```` ```rust ````) open and close alike.
    pub fn is_marker(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }
}

/// Four-space indent marking implied code lines.
pub struct Indent;

impl Indent {
    pub const PREFIX: &'static str = "    ";

    /// Removes the code indent, when present. Tabs do not count.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
