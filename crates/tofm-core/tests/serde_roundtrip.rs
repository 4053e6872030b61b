use serde_json::{json, Value};
use tofm_core::{
    derive_cell_id, from_json_slice, to_canonical_json_bytes, to_notebook_json_bytes, BlockKind,
    ContentBlock, NotebookError,
};

#[test]
fn content_blocks_round_trip_json() -> Result<(), NotebookError> {
    let blocks = vec![
        ContentBlock::markdown("## Reaction Balancing"),
        ContentBlock::code("s = Solver()\n"),
    ];
    let bytes = to_canonical_json_bytes(&blocks)?;
    let decoded: Vec<ContentBlock> = from_json_slice(&bytes)?;
    assert_eq!(decoded, blocks);
    Ok(())
}

#[test]
fn canonical_bytes_sort_keys() -> Result<(), NotebookError> {
    let value = json!({"zeta": 1, "alpha": {"b": 2, "a": 1}});
    let bytes = to_canonical_json_bytes(&value)?;
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"alpha":{"a":1,"b":2},"zeta":1}"#
    );
    Ok(())
}

#[test]
fn notebook_bytes_use_single_space_indent_and_newline() -> Result<(), NotebookError> {
    let value = json!({"nbformat": 4, "cells": [], "metadata": {}});
    let text = String::from_utf8(to_notebook_json_bytes(&value)?).unwrap();
    assert_eq!(text, "{\n \"cells\": [],\n \"metadata\": {},\n \"nbformat\": 4\n}\n");
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, value);
    Ok(())
}

#[test]
fn notebook_bytes_keep_unicode_unescaped() -> Result<(), NotebookError> {
    let value = json!({"source": "H₂ → H₂O"});
    let text = String::from_utf8(to_notebook_json_bytes(&value)?).unwrap();
    assert!(text.contains("H₂ → H₂O"));
    Ok(())
}

#[test]
fn cell_ids_are_deterministic_and_position_sensitive() {
    let first = derive_cell_id("reaction-core", 2, "code", "print( s.model() )", 0);
    let again = derive_cell_id("reaction-core", 2, "code", "print( s.model() )", 0);
    let later = derive_cell_id("reaction-core", 6, "code", "print( s.model() )", 0);
    let retry = derive_cell_id("reaction-core", 2, "code", "print( s.model() )", 1);
    assert_eq!(first, again);
    assert_ne!(first, later);
    assert_ne!(first, retry);
    assert_eq!(first.len(), 16);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn block_accessors_report_kind_and_content() {
    let block = ContentBlock::from_parts(BlockKind::Code, "s.check()");
    assert_eq!(block.kind(), BlockKind::Code);
    assert_eq!(block.kind().as_str(), "code");
    assert_eq!(block.content(), "s.check()");
    assert_eq!(ContentBlock::markdown("intro").kind(), BlockKind::Markdown);
}
