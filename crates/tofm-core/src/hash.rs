//! Stable hashing helpers.

use sha2::{Digest, Sha256};

/// Number of hex characters kept for derived cell identifiers.
pub const CELL_ID_LEN: usize = 16;

/// Derives a deterministic cell identifier.
///
/// The id depends on the notebook seed, the cell position, its kind, its
/// source and a collision counter, so regenerating a notebook yields the same
/// ids while repeated cells at different positions stay distinct.
pub fn derive_cell_id(
    seed: &str,
    index: usize,
    kind: &str,
    source: &str,
    attempt: u32,
) -> String {
    let mut hasher = Sha256::new();
    update_str(seed, &mut hasher);
    hasher.update((index as u64).to_le_bytes());
    update_str(kind, &mut hasher);
    update_str(source, &mut hasher);
    hasher.update(attempt.to_le_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..CELL_ID_LEN / 2])
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
