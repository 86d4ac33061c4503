use dioxus::prelude::*;

/// Fallback for block kinds with no registered view.
///
/// Renders a visibly marked placeholder carrying the block's id and kind so
/// a missing registration is diagnosable from the page, and does nothing
/// else.
#[component]
pub fn UnknownBlock(id: String, kind: String) -> Element {
    rsx! {
        div {
            class: "unknown-block",
            "data-block-id": "{id}",
            "data-block-type": "{kind}",
            "No renderer is registered for \"{kind}\" blocks (block {id})."
        }
    }
}
