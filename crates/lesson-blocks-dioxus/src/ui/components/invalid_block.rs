use dioxus::prelude::*;

/// Fail-closed error card for a block whose content cannot be shown.
#[component]
pub fn InvalidBlock(id: String, message: String) -> Element {
    rsx! {
        div {
            class: "invalid-block",
            "data-block-id": "{id}",
            span { class: "invalid-block-title", "This block cannot be displayed" }
            p { class: "invalid-block-message", "{message}" }
        }
    }
}
