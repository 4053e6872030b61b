#![deny(missing_docs)]
#![doc = "Core types shared by the lesson notebook generator: content blocks, errors, format descriptors and canonical encoding helpers."]

pub mod block;
pub mod errors;
pub mod format;
pub mod hash;
pub mod serde;

pub use block::{BlockKind, ContentBlock};
pub use errors::{ErrorInfo, NotebookError};
pub use format::FormatVersion;
pub use hash::derive_cell_id;
pub use crate::serde::{from_json_slice, to_canonical_json_bytes, to_notebook_json_bytes};
