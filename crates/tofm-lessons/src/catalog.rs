use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tofm_core::errors::{ErrorInfo, NotebookError};
use tofm_core::BlockKind;

fn catalog_error(code: &str, message: impl std::fmt::Display) -> NotebookError {
    NotebookError::Content(ErrorInfo::new(code, message.to_string()))
}

/// Reference to the content asset backing one cell.
///
/// Exactly one of `markdown` or `code` must be set, e.g.
/// `{ markdown: reaction/intro.md }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<PathBuf>,
}

impl CellRef {
    pub fn markdown(path: impl Into<PathBuf>) -> Self {
        Self {
            markdown: Some(path.into()),
            code: None,
        }
    }

    pub fn code(path: impl Into<PathBuf>) -> Self {
        Self {
            markdown: None,
            code: Some(path.into()),
        }
    }

    /// Returns the cell kind and asset path, or `None` unless exactly one is set.
    pub fn resolve(&self) -> Option<(BlockKind, &Path)> {
        match (&self.markdown, &self.code) {
            (Some(path), None) => Some((BlockKind::Markdown, path.as_path())),
            (None, Some(path)) => Some((BlockKind::Code, path.as_path())),
            _ => None,
        }
    }
}

/// One lesson: an ordered list of cells written to a single notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDef {
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Notebook path relative to the output directory.
    pub output: PathBuf,
    pub cells: Vec<CellRef>,
}

/// Table of lessons keyed by name, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCatalog {
    /// Optional code asset with the solver install/import preamble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<PathBuf>,
    pub lessons: Vec<LessonDef>,
    /// Directory asset paths are resolved against.
    #[serde(skip)]
    pub root: PathBuf,
}

impl LessonCatalog {
    /// Loads and validates a catalog file; assets resolve relative to its directory.
    pub fn load(path: &Path) -> Result<Self, NotebookError> {
        let bytes = fs::read(path).map_err(|err| NotebookError::io("catalog_read", path, err))?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_yaml_slice(&bytes, root).map_err(|err| match err {
            NotebookError::Content(info) => NotebookError::Content(
                info.with_context("catalog", path.display().to_string()),
            ),
            other => other,
        })
    }

    /// Parses and validates a catalog from YAML bytes.
    pub fn from_yaml_slice(bytes: &[u8], root: PathBuf) -> Result<Self, NotebookError> {
        let mut catalog: LessonCatalog =
            serde_yaml::from_slice(bytes).map_err(|err| catalog_error("catalog_parse", err))?;
        catalog.root = root;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), NotebookError> {
        if self.lessons.is_empty() {
            return Err(catalog_error("catalog_empty", "catalog defines no lessons"));
        }
        let mut names = BTreeSet::new();
        for lesson in &self.lessons {
            if lesson.name.trim().is_empty() {
                return Err(catalog_error("lesson_name", "lesson name cannot be empty"));
            }
            if !names.insert(lesson.name.as_str()) {
                return Err(NotebookError::Content(
                    ErrorInfo::new("lesson_duplicate", "lesson name is defined twice")
                        .with_context("lesson", lesson.name.clone()),
                ));
            }
            if !is_relative_inside(&lesson.output) {
                return Err(NotebookError::Content(
                    ErrorInfo::new(
                        "lesson_output",
                        "output must be a relative path inside the output directory",
                    )
                    .with_context("lesson", lesson.name.clone())
                    .with_context("output", lesson.output.display().to_string()),
                ));
            }
            if lesson.cells.is_empty() {
                return Err(NotebookError::Content(
                    ErrorInfo::new("lesson_empty", "lesson has no cells")
                        .with_context("lesson", lesson.name.clone()),
                ));
            }
            for (index, cell) in lesson.cells.iter().enumerate() {
                if cell.resolve().is_none() {
                    return Err(NotebookError::Content(
                        ErrorInfo::new(
                            "lesson_cell",
                            "cell must name exactly one of `markdown` or `code`",
                        )
                        .with_context("lesson", lesson.name.clone())
                        .with_context("cell", index.to_string()),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Looks a lesson up by name.
    pub fn lesson(&self, name: &str) -> Result<&LessonDef, NotebookError> {
        self.lessons
            .iter()
            .find(|lesson| lesson.name == name)
            .ok_or_else(|| {
                NotebookError::Content(
                    ErrorInfo::new("lesson_unknown", format!("no lesson named `{name}`"))
                        .with_hint(format!("available lessons: {}", self.names().join(", "))),
                )
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.lessons.iter().map(|lesson| lesson.name.as_str()).collect()
    }

    /// Resolves an asset path against the catalog directory.
    pub fn asset_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

fn is_relative_inside(path: &Path) -> bool {
    path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
