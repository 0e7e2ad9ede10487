//! Property-based tests for block reassembly
//!
//! Two angles: over a quiet alphabet (no markers, fences, indents or
//! comment delimiters) reassembly may only join, trim, and terminate,
//! so the visible words must survive unchanged; over arbitrary lines
//! the emission contract must hold whatever the machine encounters.

use gemloom_engine::normalize_blocks;
use proptest::prelude::*;

/// Generate prose-like lines: start with a letter, no structural
/// characters, optional sentence-final period.
fn quiet_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Blank separators
        Just(String::new()),
        // Wrapping or terminated prose
        "[a-z][a-z ]{0,11}\\.?",
    ]
}

/// Generate arbitrary single lines, markers and all.
fn any_line_strategy() -> impl Strategy<Value = String> {
    ".{0,16}"
}

proptest! {
    #[test]
    fn quiet_words_survive_reassembly(lines in prop::collection::vec(quiet_line_strategy(), 0..24)) {
        let input = lines.join("\n");
        let blocks = normalize_blocks(&input);
        let output: String = blocks.iter().map(|b| b.text.as_str()).collect();
        let expected: Vec<&str> = input.split_whitespace().collect();
        let actual: Vec<&str> = output.split_whitespace().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn emission_contract_holds_for_any_input(lines in prop::collection::vec(any_line_strategy(), 0..32)) {
        let input = lines.join("\n");
        let blocks = normalize_blocks(&input);
        for (i, block) in blocks.iter().enumerate() {
            prop_assert_eq!(block.index, i);
            prop_assert!(block.text.ends_with('\n'));
            prop_assert!(!block.text.is_empty());
        }
    }
}
