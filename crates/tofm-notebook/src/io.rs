use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;
use tofm_core::errors::NotebookError;
use tofm_core::{from_json_slice, to_notebook_json_bytes};

use crate::model::Notebook;
use crate::schema::validate_value;

/// Encodes a notebook in its canonical on-disk form.
pub fn to_notebook_bytes(notebook: &Notebook) -> Result<Vec<u8>, NotebookError> {
    to_notebook_json_bytes(notebook)
}

/// Writes `notebook` to `path`, replacing any existing file, and returns the
/// bytes written.
///
/// The parent directory must already exist.
pub fn write(notebook: &Notebook, path: &Path) -> Result<Vec<u8>, NotebookError> {
    let bytes = to_notebook_bytes(notebook)?;
    let replaced = path.is_file();
    fs::write(path, &bytes).map_err(|err| NotebookError::io("notebook_write", path, err))?;
    if replaced {
        warn!("event=notebook_replace path={}", path.display());
    }
    info!(
        "event=notebook_write path={} cells={} bytes={}",
        path.display(),
        notebook.cells.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Reads a notebook document from disk.
pub fn read(path: &Path) -> Result<Notebook, NotebookError> {
    let bytes = fs::read(path).map_err(|err| NotebookError::io("notebook_read", path, err))?;
    from_json_slice(&bytes)
}

/// Reads `path` and checks it against the notebook schema.
pub fn validate_file(path: &Path) -> Result<(), NotebookError> {
    let bytes = fs::read(path).map_err(|err| NotebookError::io("notebook_read", path, err))?;
    let value: Value = from_json_slice(&bytes)?;
    validate_value(&value)
}
