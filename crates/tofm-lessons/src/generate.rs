use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tofm_core::errors::NotebookError;
use tofm_notebook::{build_notebook_seeded, normalize, validate, write};

use crate::assets::{load_blocks, GenerateOptions};
use crate::catalog::{LessonCatalog, LessonDef};

/// Summary of one generated notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub lesson: String,
    pub output: PathBuf,
    pub cells: usize,
    /// SHA256 of the bytes written to `output`.
    pub sha256: String,
}

/// Generates the notebook for `lesson` under `out_dir`.
///
/// Runs load, build, normalize, validate and write in that order; the first
/// failure aborts the lesson.
pub fn generate_lesson(
    catalog: &LessonCatalog,
    lesson: &LessonDef,
    out_dir: &Path,
    options: GenerateOptions,
) -> Result<GenerationReport, NotebookError> {
    let blocks = load_blocks(catalog, lesson, options)?;
    let notebook = normalize(build_notebook_seeded(&lesson.name, &blocks));
    validate(&notebook)?;

    let output = out_dir.join(&lesson.output);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| NotebookError::io("output_dir", parent, err))?;
    }
    let digest = Sha256::digest(write(&notebook, &output)?);
    info!(
        "event=lesson_generated lesson={} output={} cells={}",
        lesson.name,
        output.display(),
        notebook.cells.len()
    );
    Ok(GenerationReport {
        lesson: lesson.name.clone(),
        output,
        cells: notebook.cells.len(),
        sha256: format!("{:x}", digest),
    })
}

/// Generates every lesson in catalog order, stopping at the first error.
pub fn generate_all(
    catalog: &LessonCatalog,
    out_dir: &Path,
    options: GenerateOptions,
) -> Result<Vec<GenerationReport>, NotebookError> {
    catalog
        .lessons
        .iter()
        .map(|lesson| generate_lesson(catalog, lesson, out_dir, options))
        .collect()
}
