use std::collections::BTreeSet;

use log::debug;
use serde_json::Map;
use tofm_core::derive_cell_id;

use crate::model::{CellType, ExecutionCount, Notebook};

/// Fills in schema-required fields left empty by assembly.
///
/// Normalizing an already normalized notebook returns it unchanged.
pub fn normalize(mut notebook: Notebook) -> Notebook {
    normalize_in_place(&mut notebook);
    notebook
}

/// Normalizes `notebook` in place and returns the number of fields filled.
pub fn normalize_in_place(notebook: &mut Notebook) -> usize {
    let mut filled = assign_ids(notebook);
    for cell in &mut notebook.cells {
        if cell.metadata.is_none() {
            cell.metadata = Some(Map::new());
            filled += 1;
        }
        if cell.cell_type == CellType::Code {
            if cell.execution_count.is_none() {
                cell.execution_count = Some(ExecutionCount::NotExecuted);
                filled += 1;
            }
            if cell.outputs.is_none() {
                cell.outputs = Some(Vec::new());
                filled += 1;
            }
        }
    }
    debug!(
        "event=normalize seed={} cells={} filled={}",
        notebook.id_seed,
        notebook.cells.len(),
        filled
    );
    filled
}

// First occurrence of an id wins; missing and repeated ids get fresh ones
// that avoid every id already present in the document.
fn assign_ids(notebook: &mut Notebook) -> usize {
    let mut taken: BTreeSet<String> = notebook
        .cells
        .iter()
        .filter_map(|cell| cell.id.clone())
        .collect();
    let mut seen = BTreeSet::new();
    let mut assigned = 0;
    for (index, cell) in notebook.cells.iter_mut().enumerate() {
        if let Some(id) = &cell.id {
            if seen.insert(id.clone()) {
                continue;
            }
        }
        let source = cell.source.as_deref().unwrap_or_default();
        let mut attempt = 0;
        let id = loop {
            let candidate = derive_cell_id(
                &notebook.id_seed,
                index,
                cell.cell_type.as_str(),
                source,
                attempt,
            );
            if !taken.contains(&candidate) {
                break candidate;
            }
            attempt += 1;
        };
        taken.insert(id.clone());
        seen.insert(id.clone());
        cell.id = Some(id);
        assigned += 1;
    }
    assigned
}
