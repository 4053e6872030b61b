use serde_json::{json, Map};
use tofm_core::ContentBlock;
use tofm_notebook::{build_notebook, normalize, normalize_in_place, CellType, ExecutionCount};

#[test]
fn fills_code_and_markdown_defaults() {
    let mut notebook = build_notebook(&[
        ContentBlock::markdown("intro"),
        ContentBlock::code("s.add(x==1)"),
    ]);
    let filled = normalize_in_place(&mut notebook);
    // two ids, two metadata maps, one execution count, one outputs list
    assert_eq!(filled, 6);

    let markdown = &notebook.cells[0];
    assert_eq!(markdown.cell_type, CellType::Markdown);
    assert_eq!(markdown.metadata, Some(Map::new()));
    assert!(markdown.execution_count.is_none());
    assert!(markdown.outputs.is_none());

    let code = &notebook.cells[1];
    assert_eq!(code.execution_count, Some(ExecutionCount::NotExecuted));
    assert_eq!(code.outputs, Some(Vec::new()));

    assert_eq!(normalize_in_place(&mut notebook), 0);
}

#[test]
fn keeps_existing_fields() {
    let mut notebook = build_notebook(&[ContentBlock::code("print( s.check() )")]);
    let mut metadata = Map::new();
    metadata.insert("tags".into(), json!(["exercise"]));
    notebook.cells[0].id = Some("check-cell".into());
    notebook.cells[0].metadata = Some(metadata.clone());
    notebook.cells[0].execution_count = Some(ExecutionCount::Count(3));

    let normalized = normalize(notebook);
    let cell = &normalized.cells[0];
    assert_eq!(cell.id.as_deref(), Some("check-cell"));
    assert_eq!(cell.metadata, Some(metadata));
    assert_eq!(cell.execution_count, Some(ExecutionCount::Count(3)));
    assert_eq!(cell.outputs, Some(Vec::new()));
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let mut notebook = build_notebook(&[
        ContentBlock::markdown("one"),
        ContentBlock::markdown("two"),
    ]);
    notebook.cells[0].id = Some("same".into());
    notebook.cells[1].id = Some("same".into());

    let normalized = normalize(notebook);
    assert_eq!(normalized.cells[0].id.as_deref(), Some("same"));
    let second = normalized.cells[1].id.as_deref().expect("second id");
    assert_ne!(second, "same");
}
