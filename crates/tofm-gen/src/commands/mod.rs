pub mod build;
pub mod check;
pub mod list;
pub mod version;

/// Catalog read when `--catalog` is not given.
pub const DEFAULT_CATALOG: &str = "lessons/catalog.yaml";
