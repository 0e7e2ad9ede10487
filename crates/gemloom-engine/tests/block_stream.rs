//! End-to-end behavior of the reassembly engine over whole documents.

use gemloom_engine::normalize_blocks;
use gemloom_engine::stream::BlockItem;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn texts(blocks: &[BlockItem]) -> Vec<&str> {
    blocks.iter().map(|b| b.text.as_str()).collect()
}

fn render(blocks: &[BlockItem]) -> String {
    blocks
        .iter()
        .map(|b| format!("{} {:?}", b.index, b.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
#[case("Hello there\nfriend.\n", vec!["Hello there friend.\n"])]
#[case("```\ncode\n```\n", vec!["```\ncode\n```\n"])]
#[case("    code line\nnext text.\n", vec!["```\ncode line\n```\n", "next text.\n"])]
#[case("  * item1\n  ** item2\n", vec!["- item1\n- item2\n"])]
#[case("a.\n\nb.\n", vec!["a.\n", "b.\n"])]
fn reassembles_canonical_shapes(#[case] input: &str, #[case] expected: Vec<&str>) {
    let blocks = normalize_blocks(input);
    assert_eq!(texts(&blocks), expected);
}

#[test]
fn mixed_document_stream() {
    let input = "Take notes daily\nthen review them.\n\n* capture\n* review\n\n```\ncargo run\n```\n    indented\ntail text.\n";
    let blocks = normalize_blocks(input);
    assert_snapshot!(render(&blocks), @r#"
    0 "Take notes daily then review them.\n"
    1 "- capture\n- review\n"
    2 "```\ncargo run\n```\n"
    3 "```\nindented\n```\n"
    4 "tail text.\n"
    "#);
}

#[test]
fn normalized_output_is_stable() {
    let input = "Take notes daily\nthen review them.\n\n* capture\n* review\n\n```\ncargo run\n```\n    indented\ntail text.\n";
    let first: String = normalize_blocks(input)
        .iter()
        .map(|b| b.text.as_str())
        .collect();
    let second: String = normalize_blocks(&first)
        .iter()
        .map(|b| b.text.as_str())
        .collect();
    assert_eq!(second, first);
}

#[test]
fn comment_span_is_atomic() {
    let blocks = normalize_blocks("<!--\nnote.\n-->\n");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].text.contains("note."));
}

#[test]
fn heading_followed_by_blank_is_its_own_block() {
    let blocks = normalize_blocks("# Title\n\nBody text.\n");
    assert_eq!(texts(&blocks), vec!["# Title\n", "Body text.\n"]);
}

#[test]
fn no_visible_words_are_lost() {
    // Prose only: list rewriting swaps marker tokens, so word
    // preservation is checked on unrewritten shapes.
    let input = "First wrapped\nsentence here.\n\nSecond block\ncontinues; then stops.\n\nLast line.\n";
    let output: String = normalize_blocks(input)
        .iter()
        .map(|b| b.text.as_str())
        .collect();
    let in_words: Vec<&str> = input.split_whitespace().collect();
    let out_words: Vec<&str> = output.split_whitespace().collect();
    assert_eq!(out_words, in_words);
}

#[test]
fn end_of_input_flushes_everything() {
    // Unterminated constructs of every kind still come out.
    assert_eq!(texts(&normalize_blocks("```\ndangling")), vec!["```\ndangling\n"]);
    assert_eq!(texts(&normalize_blocks("    code")), vec!["```\ncode\n```\n"]);
    assert_eq!(texts(&normalize_blocks("* entry")), vec!["- entry\n"]);
    assert_eq!(texts(&normalize_blocks("<!--\nheld.")), vec!["<!-- held.\n"]);
}
