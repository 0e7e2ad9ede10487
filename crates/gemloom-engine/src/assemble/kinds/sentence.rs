/// Sentence-shape tests steering paragraph accumulation.
pub struct Sentence;

impl Sentence {
    /// Non-empty line that does not end a sentence: it wraps onto the
    /// next source line.
    pub fn unterminated(line: &str) -> bool {
        !line.is_empty() && !line.ends_with('.')
    }

    /// Empty line or clause-final punctuation: ends the accumulation.
    pub fn breaks(line: &str) -> bool {
        line.is_empty() || line.ends_with(['.', ';', ':'])
    }
}
