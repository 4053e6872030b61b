//! Notebook assembly pipeline: construct, normalize, validate, write.

pub mod assemble;
pub mod io;
pub mod model;
pub mod normalize;
pub mod schema;

pub use assemble::{build_notebook, build_notebook_seeded};
pub use io::{read, to_notebook_bytes, validate_file, write};
pub use model::{Cell, CellType, ExecutionCount, Notebook};
pub use normalize::{normalize, normalize_in_place};
pub use schema::{validate, validate_value};
