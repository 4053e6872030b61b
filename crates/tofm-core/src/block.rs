//! Ordered content blocks that make up a lesson.

use serde::{Deserialize, Serialize};

/// Discriminant of a [`ContentBlock`], matching the nbformat `cell_type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Rendered prose.
    Markdown,
    /// Executable solver exercise.
    Code,
}

impl BlockKind {
    /// Returns the nbformat `cell_type` string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Markdown => "markdown",
            BlockKind::Code => "code",
        }
    }
}

/// One markdown or code unit of a lesson.
///
/// Blocks are immutable values; their position in the containing sequence
/// decides where they appear in the generated notebook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Markdown prose.
    Markdown {
        /// Markdown text of the block.
        text: String,
    },
    /// Code cell payload.
    Code {
        /// Source text of the block.
        source: String,
    },
}

impl ContentBlock {
    /// Creates a markdown block.
    pub fn markdown(text: impl Into<String>) -> Self {
        ContentBlock::Markdown { text: text.into() }
    }

    /// Creates a code block.
    pub fn code(source: impl Into<String>) -> Self {
        ContentBlock::Code {
            source: source.into(),
        }
    }

    /// Returns the kind tag of the block.
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Markdown { .. } => BlockKind::Markdown,
            ContentBlock::Code { .. } => BlockKind::Code,
        }
    }

    /// Returns the textual content regardless of kind.
    pub fn content(&self) -> &str {
        match self {
            ContentBlock::Markdown { text } => text,
            ContentBlock::Code { source } => source,
        }
    }

    /// Rebuilds a block from its kind and content.
    pub fn from_parts(kind: BlockKind, content: impl Into<String>) -> Self {
        match kind {
            BlockKind::Markdown => ContentBlock::markdown(content),
            BlockKind::Code => ContentBlock::code(content),
        }
    }
}
