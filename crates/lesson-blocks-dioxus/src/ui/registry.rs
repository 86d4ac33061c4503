use dioxus::prelude::*;
use lesson_blocks_engine::blocks::{Block, kinds};
use std::collections::HashMap;

use crate::ui::components::{code_block_view, quiz_block_view, text_block_view};

/// Props handed to every registered block view.
#[derive(Props, Clone, PartialEq)]
pub struct BlockViewProps {
    pub block: Block,
}

/// A registered renderer: a plain function component over [`BlockViewProps`].
///
/// Views with local state should instantiate a real component inside (the
/// built-in views are one-line adapters around `TextBlock`/`CodeBlock`/
/// `QuizBlock`) so hooks live behind a stable component identity.
pub type BlockView = fn(BlockViewProps) -> Element;

/// Mapping from a block's `kind` discriminator to the view that renders it.
///
/// The registry is an explicitly constructed value injected into
/// [`crate::ui::components::BlockList`]; there is no process-wide mutable
/// singleton. Populate it once at startup and treat it as read-only from
/// then on; a clone held by a rendered tree is a snapshot, unaffected by
/// later mutation of the original. None of the operations panic.
#[derive(Clone, Default, PartialEq)]
pub struct BlockRegistry {
    views: HashMap<String, BlockView>,
}

impl BlockRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in kinds (`text`, `code`, `quiz`).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(kinds::TEXT, text_block_view);
        registry.register(kinds::CODE, code_block_view);
        registry.register(kinds::QUIZ, quiz_block_view);
        registry
    }

    /// Register a view for a kind. Last write wins: registering an already
    /// registered kind silently replaces the previous view.
    pub fn register(&mut self, kind: impl Into<String>, view: BlockView) {
        self.views.insert(kind.into(), view);
    }

    /// Remove a kind. Removing a kind that was never registered is a no-op.
    pub fn unregister(&mut self, kind: &str) {
        self.views.remove(kind);
    }

    pub fn get(&self, kind: &str) -> Option<BlockView> {
        self.views.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.views.contains_key(kind)
    }

    /// Snapshot of every registration.
    pub fn views(&self) -> HashMap<String, BlockView> {
        self.views.clone()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
