//! Notebook interchange format descriptor.

use serde::{Deserialize, Serialize};

/// Version of the nbformat schema a document targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormatVersion {
    /// Major version (`nbformat`).
    pub major: u32,
    /// Minor version (`nbformat_minor`).
    pub minor: u32,
}

impl FormatVersion {
    /// nbformat 4.5, the first minor release that requires cell ids.
    pub const NBFORMAT_4_5: FormatVersion = FormatVersion::new(4, 5);

    /// Creates a new format version descriptor.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::NBFORMAT_4_5
    }
}
