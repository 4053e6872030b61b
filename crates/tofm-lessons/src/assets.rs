//! Reading lesson content assets.
//!
//! Markdown assets may embed images with `{{image:<path>}}`; the token is
//! replaced by a base64 `data:` URI so the notebook carries the image inline.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use tofm_core::errors::{ErrorInfo, NotebookError};
use tofm_core::{BlockKind, ContentBlock};

use crate::catalog::{LessonCatalog, LessonDef};

const IMAGE_OPEN: &str = "{{image:";
const IMAGE_CLOSE: &str = "}}";

/// Switches applied when turning a lesson into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateOptions {
    /// Prepend the catalog's setup cell (solver install and imports).
    pub include_setup: bool,
}

/// Reads a UTF-8 text asset; undecodable bytes count as an unreadable file.
pub fn read_text(path: &Path) -> Result<String, NotebookError> {
    let bytes = fs::read(path).map_err(|err| NotebookError::io("asset_read", path, err))?;
    String::from_utf8(bytes).map_err(|err| NotebookError::io("asset_encoding", path, err))
}

/// Returns the media type used in data URIs for an image file.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

fn data_uri(path: &Path) -> Result<String, NotebookError> {
    let mime = mime_for(path).ok_or_else(|| {
        NotebookError::Content(
            ErrorInfo::new("image_type", "unsupported image type")
                .with_context("path", path.display().to_string())
                .with_hint("use a png, jpg, gif or svg file"),
        )
    })?;
    let bytes = fs::read(path).map_err(|err| NotebookError::io("image_read", path, err))?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Replaces every `{{image:<path>}}` token in `text`, resolving paths against `root`.
pub fn inline_images(text: &str, root: &Path) -> Result<String, NotebookError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(IMAGE_OPEN) {
        let after_open = &rest[start + IMAGE_OPEN.len()..];
        let Some(end) = after_open.find(IMAGE_CLOSE) else {
            break;
        };
        let relative = after_open[..end].trim();
        out.push_str(&rest[..start]);
        out.push_str(&data_uri(&root.join(relative))?);
        debug!("event=image_inline path={relative}");
        rest = &after_open[end + IMAGE_CLOSE.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Loads the ordered content blocks of `lesson`.
///
/// Every asset is read before returning, so a missing file aborts the lesson
/// before anything is written.
pub fn load_blocks(
    catalog: &LessonCatalog,
    lesson: &LessonDef,
    options: GenerateOptions,
) -> Result<Vec<ContentBlock>, NotebookError> {
    let mut blocks = Vec::with_capacity(lesson.cells.len() + 1);
    if options.include_setup {
        let setup = catalog.setup.as_ref().ok_or_else(|| {
            NotebookError::Content(
                ErrorInfo::new("setup_missing", "catalog does not define a setup cell")
                    .with_context("lesson", lesson.name.clone()),
            )
        })?;
        blocks.push(ContentBlock::code(read_text(&catalog.asset_path(setup))?));
    }
    for (index, cell) in lesson.cells.iter().enumerate() {
        let (kind, relative) = cell.resolve().ok_or_else(|| {
            NotebookError::Content(
                ErrorInfo::new("lesson_cell", "cell must name exactly one asset")
                    .with_context("lesson", lesson.name.clone())
                    .with_context("cell", index.to_string()),
            )
        })?;
        let text = read_text(&catalog.asset_path(relative))?;
        let block = match kind {
            BlockKind::Markdown => ContentBlock::markdown(inline_images(&text, &catalog.root)?),
            BlockKind::Code => ContentBlock::code(text),
        };
        blocks.push(block);
    }
    Ok(blocks)
}
