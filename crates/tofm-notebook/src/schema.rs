//! Structural validation against the nbformat 4.5 schema.
//!
//! Only the parts of the schema that notebooks produced or consumed by this
//! workspace can touch are enforced: top-level keys, format version, cell
//! shape per `cell_type`, id syntax and uniqueness, and output tags. The
//! first violation found is reported with the JSON path of the offending
//! field.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tofm_core::errors::NotebookError;
use tofm_core::FormatVersion;

use crate::model::Notebook;

const TOP_LEVEL_KEYS: [&str; 4] = ["cells", "metadata", "nbformat", "nbformat_minor"];
const CODE_CELL_KEYS: [&str; 6] = [
    "cell_type",
    "execution_count",
    "id",
    "metadata",
    "outputs",
    "source",
];
const TEXT_CELL_KEYS: [&str; 5] = ["attachments", "cell_type", "id", "metadata", "source"];
const OUTPUT_TYPES: [&str; 4] = ["display_data", "error", "execute_result", "stream"];
const MAX_ID_LEN: usize = 64;

type SchemaResult = Result<(), NotebookError>;

/// Validates an in-memory notebook.
pub fn validate(notebook: &Notebook) -> SchemaResult {
    let value = serde_json::to_value(notebook).map_err(|err| {
        NotebookError::schema(
            "unserializable",
            "$",
            format!("notebook cannot be encoded: {err}"),
        )
    })?;
    validate_value(&value)
}

/// Validates a parsed notebook document.
pub fn validate_value(value: &Value) -> SchemaResult {
    let root = expect_object(value, "$")?;
    check_keys(root, &TOP_LEVEL_KEYS, &TOP_LEVEL_KEYS, "")?;

    let target = FormatVersion::NBFORMAT_4_5;
    let major = expect_u64(&root["nbformat"], "nbformat")?;
    if major != u64::from(target.major) {
        return Err(NotebookError::schema(
            "unsupported_version",
            "nbformat",
            format!("expected nbformat {}, found {major}", target.major),
        ));
    }
    let minor = expect_u64(&root["nbformat_minor"], "nbformat_minor")?;
    if minor < u64::from(target.minor) {
        return Err(NotebookError::schema(
            "unsupported_version",
            "nbformat_minor",
            format!("expected nbformat_minor >= {}, found {minor}", target.minor),
        ));
    }
    expect_object(&root["metadata"], "metadata")?;

    let cells = root["cells"].as_array().ok_or_else(|| {
        NotebookError::schema("wrong_type", "cells", "cells must be an array")
    })?;
    let mut ids = BTreeSet::new();
    for (index, cell) in cells.iter().enumerate() {
        validate_cell(cell, &format!("cells[{index}]"), &mut ids)?;
    }
    Ok(())
}

fn validate_cell(value: &Value, path: &str, ids: &mut BTreeSet<String>) -> SchemaResult {
    let cell = expect_object(value, path)?;
    let cell_type = cell
        .get("cell_type")
        .ok_or_else(|| missing(path, "cell_type"))?
        .as_str()
        .ok_or_else(|| {
            NotebookError::schema(
                "wrong_type",
                field(path, "cell_type"),
                "cell_type must be a string",
            )
        })?;
    match cell_type {
        "code" => {
            check_keys(cell, &CODE_CELL_KEYS, &CODE_CELL_KEYS, path)?;
            validate_common(cell, path, ids)?;
            validate_execution_count(&cell["execution_count"], &field(path, "execution_count"))?;
            validate_outputs(&cell["outputs"], &field(path, "outputs"))
        }
        "markdown" | "raw" => {
            check_keys(cell, &TEXT_CELL_KEYS[1..], &TEXT_CELL_KEYS, path)?;
            validate_common(cell, path, ids)?;
            match cell.get("attachments") {
                Some(attachments) => {
                    expect_object(attachments, &field(path, "attachments")).map(|_| ())
                }
                None => Ok(()),
            }
        }
        other => Err(NotebookError::schema(
            "unknown_cell_type",
            field(path, "cell_type"),
            format!("unknown cell_type `{other}`"),
        )),
    }
}

fn validate_common(
    cell: &Map<String, Value>,
    path: &str,
    ids: &mut BTreeSet<String>,
) -> SchemaResult {
    let id_path = field(path, "id");
    let id = cell["id"].as_str().ok_or_else(|| {
        NotebookError::schema("wrong_type", id_path.clone(), "id must be a string")
    })?;
    if !is_valid_id(id) {
        return Err(NotebookError::schema(
            "invalid_id",
            id_path,
            format!("id `{id}` must be 1-{MAX_ID_LEN} characters of [A-Za-z0-9_-]"),
        ));
    }
    if !ids.insert(id.to_owned()) {
        return Err(NotebookError::schema(
            "duplicate_id",
            id_path,
            format!("id `{id}` is used by an earlier cell"),
        ));
    }
    expect_object(&cell["metadata"], &field(path, "metadata"))?;
    validate_source(&cell["source"], &field(path, "source"))
}

fn validate_source(value: &Value, path: &str) -> SchemaResult {
    match value {
        Value::String(_) => Ok(()),
        Value::Array(lines) if lines.iter().all(Value::is_string) => Ok(()),
        _ => Err(NotebookError::schema(
            "wrong_type",
            path,
            "source must be a string or an array of strings",
        )),
    }
}

fn validate_execution_count(value: &Value, path: &str) -> SchemaResult {
    match value {
        Value::Null => Ok(()),
        Value::Number(number) if number.is_u64() => Ok(()),
        _ => Err(NotebookError::schema(
            "wrong_type",
            path,
            "execution_count must be null or a non-negative integer",
        )),
    }
}

fn validate_outputs(value: &Value, path: &str) -> SchemaResult {
    let outputs = value
        .as_array()
        .ok_or_else(|| NotebookError::schema("wrong_type", path, "outputs must be an array"))?;
    for (index, output) in outputs.iter().enumerate() {
        let output_path = format!("{path}[{index}]");
        let output = expect_object(output, &output_path)?;
        let output_type = output
            .get("output_type")
            .and_then(Value::as_str)
            .ok_or_else(|| missing(&output_path, "output_type"))?;
        if !OUTPUT_TYPES.contains(&output_type) {
            return Err(NotebookError::schema(
                "unknown_output_type",
                field(&output_path, "output_type"),
                format!("unknown output_type `{output_type}`"),
            ));
        }
    }
    Ok(())
}

fn check_keys(
    object: &Map<String, Value>,
    required: &[&str],
    allowed: &[&str],
    path: &str,
) -> SchemaResult {
    for key in required {
        if !object.contains_key(*key) {
            return Err(missing(path, key));
        }
    }
    if let Some(extra) = object.keys().find(|key| !allowed.contains(&key.as_str())) {
        return Err(NotebookError::schema(
            "unexpected_field",
            field(path, extra),
            format!("unexpected field `{extra}`"),
        ));
    }
    Ok(())
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, NotebookError> {
    value
        .as_object()
        .ok_or_else(|| NotebookError::schema("wrong_type", path, "expected an object"))
}

fn expect_u64(value: &Value, path: &str) -> Result<u64, NotebookError> {
    value
        .as_u64()
        .ok_or_else(|| NotebookError::schema("wrong_type", path, "expected a non-negative integer"))
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn missing(path: &str, key: &str) -> NotebookError {
    NotebookError::schema(
        "missing_field",
        field(path, key),
        format!("required field `{key}` is missing"),
    )
}

fn field(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}
