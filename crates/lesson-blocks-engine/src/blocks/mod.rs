pub mod code;
pub mod quiz;
pub mod text;

pub use code::CodeContent;
pub use quiz::{QuizContent, QuizContentError, QuizKind, QuizOption, QuizPhase, QuizSession};
pub use text::{Alignment, TextContent, TextFormat, TextSize, TextStyle};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminator values for the built-in block kinds.
pub mod kinds {
    pub const TEXT: &str = "text";
    pub const CODE: &str = "code";
    pub const QUIZ: &str = "quiz";
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("block '{id}' has malformed '{kind}' content: {source}")]
    Malformed {
        id: String,
        kind: String,
        source: serde_json::Error,
    },
}

/// A single unit of instructional content.
///
/// Blocks arrive from the host as an ordered JSON sequence and are immutable
/// inputs to the rendering engine: renderers never modify a block, they only
/// surface changes as `on_update` events back to the owning store. The `kind`
/// discriminator (serialized as `type`) selects a renderer at dispatch time;
/// the payload stays untyped until a renderer decodes it with
/// [`Block::content_as`], so unknown kinds can flow through the sequence
/// without breaking anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identifier, unique within one rendered sequence.
    pub id: String,
    /// Renderer discriminator.
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific payload, decoded on demand.
    pub content: serde_json::Value,
}

impl Block {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            content,
        }
    }

    /// Decode the payload into the typed content for this block's kind.
    ///
    /// Fails closed: a payload that does not match `T` yields a
    /// [`ContentError`] naming the block, and the caller is expected to show
    /// an error state instead of guessing.
    pub fn content_as<T: DeserializeOwned>(&self) -> Result<T, ContentError> {
        serde_json::from_value(self.content.clone()).map_err(|source| ContentError::Malformed {
            id: self.id.clone(),
            kind: self.kind.clone(),
            source,
        })
    }
}
