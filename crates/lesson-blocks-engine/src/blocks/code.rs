use serde::{Deserialize, Serialize};

/// Payload of a `code` block.
///
/// `code` is displayed (and copied) verbatim. `executable` opts the block
/// into the simulated execution backend in [`crate::exec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeContent {
    pub code: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub executable: bool,
}

impl CodeContent {
    /// Header label: the filename when present, otherwise the language.
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.language)
    }
}
