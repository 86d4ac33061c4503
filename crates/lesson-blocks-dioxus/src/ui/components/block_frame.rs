use dioxus::prelude::*;
use lesson_blocks_engine::blocks::Block;

/// Editing chrome around any rendered block view.
///
/// With `is_editing` off this is an exact pass-through. With it on, the
/// wrapped view gains "Edit" and "Delete" controls: Edit hands the block
/// back through `on_update` (the hook point for a host-owned inline
/// editor), Delete hands the block id through `on_delete`. The wrapped view
/// never has to know either affordance exists.
#[component]
pub fn BlockFrame(
    block: Block,
    is_editing: bool,
    on_update: Callback<Block>,
    on_delete: Callback<String>,
    children: Element,
) -> Element {
    if !is_editing {
        return rsx! {
            {children}
        };
    }

    let edit_block = block.clone();
    let delete_id = block.id.clone();
    rsx! {
        div { class: "block-frame",
            div { class: "block-frame-controls",
                button {
                    class: "block-edit",
                    onclick: move |_| on_update.call(edit_block.clone()),
                    "Edit"
                }
                button {
                    class: "block-delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
            {children}
        }
    }
}
