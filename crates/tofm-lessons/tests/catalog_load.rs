mod common;

use std::path::PathBuf;

use tofm_core::errors::NotebookError;
use tofm_core::BlockKind;
use tofm_lessons::{CellRef, LessonCatalog};

use common::shipped_catalog_path;

fn parse(yaml: &str) -> Result<LessonCatalog, NotebookError> {
    LessonCatalog::from_yaml_slice(yaml.as_bytes(), PathBuf::from("."))
}

#[test]
fn shipped_catalog_loads() -> Result<(), NotebookError> {
    let catalog = LessonCatalog::load(&shipped_catalog_path())?;
    assert_eq!(catalog.names(), vec!["reaction-core", "master-theorem"]);
    assert_eq!(catalog.setup, Some(PathBuf::from("shared/setup.py")));

    let reaction = catalog.lesson("reaction-core")?;
    assert_eq!(reaction.output, PathBuf::from("REACTION-CORE.ipynb"));
    assert_eq!(reaction.cells.len(), 11);
    assert_eq!(
        reaction.cells[0].resolve().map(|(kind, _)| kind),
        Some(BlockKind::Markdown)
    );

    let master = catalog.lesson("master-theorem")?;
    assert_eq!(
        master.output,
        PathBuf::from("master-theorem/MASTER-THEOREM-CORE.ipynb")
    );
    Ok(())
}

#[test]
fn unknown_lesson_lists_alternatives() {
    let catalog = LessonCatalog::load(&shipped_catalog_path()).unwrap();
    let err = catalog.lesson("sorting").unwrap_err();
    assert_eq!(err.info().code, "lesson_unknown");
    assert!(err
        .info()
        .hint
        .as_deref()
        .unwrap()
        .contains("reaction-core, master-theorem"));
}

#[test]
fn missing_catalog_is_io_error() {
    let err = LessonCatalog::load(&PathBuf::from("does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, NotebookError::Io(_)));
}

#[test]
fn cell_refs_parse_from_single_key_maps() -> Result<(), NotebookError> {
    let catalog = parse(
        "lessons:\n  - name: demo\n    output: demo.ipynb\n    cells:\n      - markdown: intro.md\n      - code: run.py\n",
    )?;
    let cells = &catalog.lessons[0].cells;
    assert_eq!(cells[0], CellRef::markdown("intro.md"));
    assert_eq!(cells[1], CellRef::code("run.py"));
    assert_eq!(catalog.lessons[0].title, "");
    Ok(())
}

#[test]
fn invalid_catalogs_are_rejected() {
    let cases = [
        ("lessons: []\n", "catalog_empty"),
        (
            "lessons:\n  - name: ' '\n    output: a.ipynb\n    cells: [{code: a.py}]\n",
            "lesson_name",
        ),
        (
            "lessons:\n  - name: a\n    output: a.ipynb\n    cells: [{code: a.py}]\n  - name: a\n    output: b.ipynb\n    cells: [{code: b.py}]\n",
            "lesson_duplicate",
        ),
        (
            "lessons:\n  - name: a\n    output: a.ipynb\n    cells: []\n",
            "lesson_empty",
        ),
        (
            "lessons:\n  - name: a\n    output: a.ipynb\n    cells: [{code: a.py, markdown: a.md}]\n",
            "lesson_cell",
        ),
        (
            "lessons:\n  - name: a\n    output: ../escape.ipynb\n    cells: [{code: a.py}]\n",
            "lesson_output",
        ),
        (
            "lessons:\n  - name: a\n    output: /tmp/abs.ipynb\n    cells: [{code: a.py}]\n",
            "lesson_output",
        ),
        ("lessons: {not: a list}\n", "catalog_parse"),
    ];
    for (yaml, code) in cases {
        let err = parse(yaml).expect_err(yaml);
        assert!(matches!(err, NotebookError::Content(_)), "{yaml}");
        assert_eq!(err.info().code, code, "{yaml}");
    }
}
