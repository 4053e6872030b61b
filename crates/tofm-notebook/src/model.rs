//! In-memory notebook document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tofm_core::errors::NotebookError;
use tofm_core::{BlockKind, ContentBlock, FormatVersion};

/// nbformat `cell_type` tag.
///
/// `raw` cells never come out of assembly but may appear in notebooks read
/// from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Rendered prose.
    Markdown,
    /// Executable source with outputs.
    Code,
    /// Unrendered text passed through verbatim.
    Raw,
}

impl CellType {
    /// Returns the serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Markdown => "markdown",
            CellType::Code => "code",
            CellType::Raw => "raw",
        }
    }

    /// Returns the content block kind, if the cell type has one.
    pub fn block_kind(&self) -> Option<BlockKind> {
        match self {
            CellType::Markdown => Some(BlockKind::Markdown),
            CellType::Code => Some(BlockKind::Code),
            CellType::Raw => None,
        }
    }
}

impl From<BlockKind> for CellType {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Markdown => CellType::Markdown,
            BlockKind::Code => CellType::Code,
        }
    }
}

/// Execution state recorded on a code cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionCount {
    /// The cell has never run; serialized as `null`.
    #[default]
    NotExecuted,
    /// Prompt number assigned by a kernel.
    Count(u32),
}

impl Serialize for ExecutionCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExecutionCount::NotExecuted => serializer.serialize_none(),
            ExecutionCount::Count(count) => serializer.serialize_u32(*count),
        }
    }
}

impl<'de> Deserialize<'de> for ExecutionCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<u32>::deserialize(deserializer)? {
            None => ExecutionCount::NotExecuted,
            Some(count) => ExecutionCount::Count(count),
        })
    }
}

// A present `null` must stay distinguishable from an absent key.
fn present_execution_count<'de, D>(deserializer: D) -> Result<Option<ExecutionCount>, D::Error>
where
    D: Deserializer<'de>,
{
    ExecutionCount::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MultilineString {
    Single(String),
    Lines(Vec<String>),
}

fn multiline_source<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(match MultilineString::deserialize(deserializer)? {
        MultilineString::Single(text) => text,
        MultilineString::Lines(lines) => lines.concat(),
    }))
}

/// One notebook cell.
///
/// Every field except `cell_type` is optional so a freshly assembled cell can
/// be told apart from a normalized one; `None` means "not filled in yet" and
/// the key is omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// `markdown`, `code` or `raw`.
    pub cell_type: CellType,
    /// Notebook-unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form cell metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Cell content.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "multiline_source"
    )]
    pub source: Option<String>,
    /// Inline attachments referenced by markdown cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Map<String, Value>>,
    /// Execution state of a code cell.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_execution_count"
    )]
    pub execution_count: Option<ExecutionCount>,
    /// Outputs of a code cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,
}

impl Cell {
    /// Creates a bare cell carrying only its type and content.
    pub fn from_block(block: &ContentBlock) -> Self {
        Self {
            cell_type: block.kind().into(),
            id: None,
            metadata: None,
            source: Some(block.content().to_owned()),
            attachments: None,
            execution_count: None,
            outputs: None,
        }
    }

    /// Converts the cell back into a content block.
    ///
    /// Returns `None` for raw cells and for cells without a source.
    pub fn to_block(&self) -> Option<ContentBlock> {
        let kind = self.cell_type.block_kind()?;
        self.source
            .as_ref()
            .map(|source| ContentBlock::from_parts(kind, source.clone()))
    }
}

/// An nbformat document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Ordered cells.
    pub cells: Vec<Cell>,
    /// Notebook-level metadata.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Major format version.
    pub nbformat: u32,
    /// Minor format version.
    pub nbformat_minor: u32,
    /// Seed used to derive deterministic cell ids during normalization.
    #[serde(skip)]
    pub id_seed: String,
}

impl Notebook {
    /// Creates an empty notebook targeting `version`.
    pub fn empty(version: FormatVersion) -> Self {
        Self {
            cells: Vec::new(),
            metadata: Map::new(),
            nbformat: version.major,
            nbformat_minor: version.minor,
            id_seed: String::new(),
        }
    }

    /// Extracts the content blocks in document order.
    ///
    /// Fails on the first raw cell or cell without a source.
    pub fn blocks(&self) -> Result<Vec<ContentBlock>, NotebookError> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                if cell.cell_type == CellType::Raw {
                    return Err(NotebookError::schema(
                        "raw_cell",
                        format!("cells[{index}].cell_type"),
                        "raw cells have no content block",
                    ));
                }
                cell.to_block().ok_or_else(|| {
                    NotebookError::schema(
                        "missing_field",
                        format!("cells[{index}].source"),
                        "cell has no source",
                    )
                })
            })
            .collect()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the notebook has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
