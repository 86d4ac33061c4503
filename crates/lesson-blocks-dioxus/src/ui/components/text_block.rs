use dioxus::prelude::*;
use lesson_blocks_engine::blocks::{Block, TextContent, TextFormat};
use lesson_blocks_engine::markup;

use crate::ui::components::invalid_block::InvalidBlock;
use crate::ui::registry::BlockViewProps;

/// Renderer for `text` blocks.
///
/// `plain` text is emitted as a literal text node, so embedded markup stays
/// inert. `markdown` and `html` go through the engine's sanitizing renderer
/// before being injected; nothing reaches `dangerous_inner_html` unsanitized.
#[component]
pub fn TextBlock(block: Block) -> Element {
    let content = match block.content_as::<TextContent>() {
        Ok(content) => content,
        Err(err) => {
            return rsx! {
                InvalidBlock { id: block.id.clone(), message: err.to_string() }
            };
        }
    };

    let class = format!(
        "text-block align-{} size-{}",
        content.style.alignment.as_css(),
        content.style.size.as_css()
    );

    match content.format {
        TextFormat::Plain => rsx! {
            p { class: "{class}", "{content.text}" }
        },
        TextFormat::Markdown => {
            let rendered = markup::markdown_to_html(&content.text);
            rsx! {
                div { class: "{class}", dangerous_inner_html: rendered }
            }
        }
        TextFormat::Html => {
            let rendered = markup::sanitize_html(&content.text);
            rsx! {
                div { class: "{class}", dangerous_inner_html: rendered }
            }
        }
    }
}

pub fn text_block_view(props: BlockViewProps) -> Element {
    rsx! {
        TextBlock { block: props.block }
    }
}
