use regex::Regex;
use std::sync::OnceLock;

pub struct ListMarker;

impl ListMarker {
    /// Optional indentation, a run of marker characters, then anything else.
    const ENTRY: &'static str = r"^([ \t]*[-*^]+)[^-*^]";
    /// A `*`/`_` pair with at least one character between, anywhere in the line.
    const EMPHASIS: &'static str = r"[*_].+[*_]";

    fn entry_regex() -> &'static Regex {
        static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();
        ENTRY_REGEX.get_or_init(|| Regex::new(Self::ENTRY).expect("Invalid list entry regex"))
    }

    fn emphasis_regex() -> &'static Regex {
        static EMPHASIS_REGEX: OnceLock<Regex> = OnceLock::new();
        EMPHASIS_REGEX.get_or_init(|| Regex::new(Self::EMPHASIS).expect("Invalid emphasis regex"))
    }

    /// Rewrites a list entry to a single `-` level, flattening any nesting
    /// depth. Returns `None` for non-entries. The emphasis pattern takes
    /// precedence so a line opening with `*word*` is not read as a bullet.
    pub fn collapse(line: &str) -> Option<String> {
        if Self::emphasis_regex().is_match(line) {
            return None;
        }
        let run = Self::entry_regex().captures(line)?.get(1)?;
        Some(format!("-{}", &line[run.end()..]))
    }
}
