use dioxus::prelude::*;
use lesson_blocks_engine::blocks::Block;

use crate::ui::components::block_frame::BlockFrame;
use crate::ui::components::invalid_block::InvalidBlock;
use crate::ui::components::unknown_block::UnknownBlock;
use crate::ui::registry::BlockRegistry;

/// Dispatcher over an ordered block sequence.
///
/// Each block is resolved through the injected [`BlockRegistry`]; resolved
/// views render inside the editing frame and a per-block error boundary, a
/// missing registration renders [`UnknownBlock`]. Dispatch never panics and
/// never drops a block silently. Slots are keyed by `kind:id`, so a changed
/// id (or kind) remounts the view and discards its ephemeral state; beyond
/// that the dispatcher keeps no state across renders and does not touch its
/// input.
#[component]
pub fn BlockList(
    blocks: Vec<Block>,
    registry: BlockRegistry,
    is_editing: bool,
    on_update: Callback<Block>,
    on_delete: Callback<String>,
) -> Element {
    rsx! {
        div { class: "block-list",
            for block in blocks.iter() {
                BlockSlot {
                    key: "{block.kind}:{block.id}",
                    block: block.clone(),
                    registry: registry.clone(),
                    is_editing,
                    on_update,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn BlockSlot(
    block: Block,
    registry: BlockRegistry,
    is_editing: bool,
    on_update: Callback<Block>,
    on_delete: Callback<String>,
) -> Element {
    let Some(view) = registry.get(&block.kind) else {
        log::warn!(
            "no renderer registered for block type '{}' (block '{}')",
            block.kind,
            block.id
        );
        return rsx! {
            UnknownBlock { id: block.id.clone(), kind: block.kind.clone() }
        };
    };

    #[allow(non_snake_case)]
    let View = view;
    let failed_id = block.id.clone();
    rsx! {
        ErrorBoundary {
            handle_error: move |_: ErrorContext| {
                rsx! {
                    InvalidBlock {
                        id: failed_id.clone(),
                        message: "this block failed to render".to_string(),
                    }
                }
            },
            BlockFrame { block: block.clone(), is_editing, on_update, on_delete,
                View { block: block.clone() }
            }
        }
    }
}
