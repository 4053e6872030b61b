use tofm_core::{ContentBlock, FormatVersion};

use crate::model::{Cell, Notebook};

/// Builds a notebook with one cell per block, in input order.
///
/// Cells only carry their type and content; ids, metadata and execution
/// state are left for [`crate::normalize`].
pub fn build_notebook(blocks: &[ContentBlock]) -> Notebook {
    build_notebook_seeded("", blocks)
}

/// Same as [`build_notebook`], recording `seed` for deterministic cell ids.
pub fn build_notebook_seeded(seed: &str, blocks: &[ContentBlock]) -> Notebook {
    let mut notebook = Notebook::empty(FormatVersion::NBFORMAT_4_5);
    notebook.id_seed = seed.to_owned();
    notebook.cells = blocks.iter().map(Cell::from_block).collect();
    notebook
}
