#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .canonicalize()
        .unwrap()
}

pub fn shipped_catalog_path() -> PathBuf {
    workspace_root().join("lessons").join("catalog.yaml")
}

pub fn write_asset(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create asset dir");
    }
    fs::write(path, contents).expect("write asset");
}
