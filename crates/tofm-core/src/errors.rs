//! Structured error types shared across the generator crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NotebookError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, cell indices, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for notebook generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NotebookError {
    /// Asset reads, output directory creation and notebook writes.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Notebook documents that do not satisfy the nbformat schema.
    #[error("schema error: {0}")]
    Schema(ErrorInfo),
    /// Malformed lesson catalogs and JSON encoding failures.
    #[error("content error: {0}")]
    Content(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl NotebookError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NotebookError::Io(info) | NotebookError::Schema(info) | NotebookError::Content(info) => {
                info
            }
        }
    }

    /// Wraps a filesystem failure, recording the path it happened on.
    pub fn io(code: &str, path: &Path, err: impl Display) -> Self {
        NotebookError::Io(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    }

    /// Builds a schema violation for the field at `path`.
    pub fn schema(code: &str, path: impl Into<String>, message: impl Into<String>) -> Self {
        NotebookError::Schema(ErrorInfo::new(code, message).with_context("path", path))
    }

    /// Returns the JSON path recorded for schema violations.
    pub fn schema_path(&self) -> Option<&str> {
        match self {
            NotebookError::Schema(info) => info.context.get("path").map(String::as_str),
            _ => None,
        }
    }
}
