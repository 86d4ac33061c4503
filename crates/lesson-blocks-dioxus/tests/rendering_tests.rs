//! Integration tests for the block dispatch pipeline: registry lookup,
//! placeholder fallback, editing chrome, and per-block isolation, asserted
//! over server-side rendered output.

use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use dioxus_ssr::render;
use lesson_blocks_dioxus::ui::components::BlockList;
use lesson_blocks_dioxus::ui::registry::{BlockRegistry, BlockViewProps};
use lesson_blocks_engine::blocks::{Block, kinds};
use serde_json::json;

#[component]
fn Harness(blocks: Vec<Block>, registry: BlockRegistry, is_editing: bool) -> Element {
    rsx! {
        BlockList {
            blocks,
            registry,
            is_editing,
            on_update: move |_| {},
            on_delete: move |_| {},
        }
    }
}

fn render_blocks(blocks: Vec<Block>, registry: BlockRegistry, is_editing: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            blocks,
            registry,
            is_editing,
        },
    );
    dom.rebuild_in_place();
    render(&dom)
}

fn text_block(id: &str, text: &str) -> Block {
    Block::new(id, kinds::TEXT, json!({ "text": text, "format": "plain" }))
}

fn sample_sequence() -> Vec<Block> {
    vec![
        text_block("t1", "Welcome to the lesson"),
        Block::new(
            "c1",
            kinds::CODE,
            json!({ "code": "print('hi')", "language": "python", "executable": true }),
        ),
        Block::new(
            "q1",
            kinds::QUIZ,
            json!({
                "question": "2+2?",
                "type": "multiple-choice",
                "options": [
                    { "id": "a", "text": "3", "correct": false },
                    { "id": "b", "text": "4", "correct": true }
                ],
                "points": 1
            }),
        ),
    ]
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn mixed_sequence_renders_every_registered_kind() {
    let html = render_blocks(sample_sequence(), BlockRegistry::with_defaults(), false);

    assert!(html.contains("Welcome to the lesson"));
    assert!(html.contains("language-python"));
    assert!(html.contains("2+2?"));
    assert_eq!(count(&html, "class=\"unknown-block\""), 0);
}

#[test]
fn unknown_kind_renders_exactly_one_placeholder() {
    let mut blocks = sample_sequence();
    blocks.push(Block::new("x", "mystery", json!({})));

    let html = render_blocks(blocks, BlockRegistry::with_defaults(), false);

    assert_eq!(count(&html, "class=\"unknown-block\""), 1);
    assert!(html.contains("data-block-id=\"x\""));
    assert!(html.contains("data-block-type=\"mystery\""));
    // The unregistered block must not take its siblings down with it.
    assert!(html.contains("Welcome to the lesson"));
    assert!(html.contains("2+2?"));
}

#[test]
fn lone_mystery_block_yields_a_single_placeholder() {
    let blocks = vec![Block::new("x", "mystery", json!({}))];
    let html = render_blocks(blocks, BlockRegistry::with_defaults(), false);

    assert_eq!(count(&html, "class=\"unknown-block\""), 1);
    assert!(html.contains("data-block-id=\"x\""));
}

#[test]
fn empty_sequence_renders_an_empty_list() {
    let html = render_blocks(Vec::new(), BlockRegistry::with_defaults(), false);
    assert!(html.contains("block-list"));
    assert_eq!(count(&html, "class=\"unknown-block\""), 0);
}

fn marker_view(props: BlockViewProps) -> Element {
    rsx! {
        div { class: "marker-view", "{props.block.id}" }
    }
}

#[test]
fn re_registering_a_kind_replaces_the_renderer() {
    let mut registry = BlockRegistry::with_defaults();
    registry.register(kinds::TEXT, marker_view);

    let html = render_blocks(vec![text_block("t1", "ignored")], registry, false);

    // Only the second registration is ever invoked.
    assert!(html.contains("marker-view"));
    assert!(html.contains("t1"));
    assert!(!html.contains("text-block"));
    assert!(!html.contains("ignored"));
}

#[test]
fn new_kinds_need_only_a_registration() {
    let mut registry = BlockRegistry::with_defaults();
    registry.register("marker", marker_view);

    let blocks = vec![Block::new("m1", "marker", json!({}))];
    let html = render_blocks(blocks, registry, false);

    assert!(html.contains("marker-view"));
    assert_eq!(count(&html, "class=\"unknown-block\""), 0);
}

#[test]
fn unregistering_a_kind_restores_the_placeholder() {
    let mut registry = BlockRegistry::with_defaults();
    registry.unregister(kinds::TEXT);

    let html = render_blocks(vec![text_block("t1", "orphaned")], registry, false);

    assert_eq!(count(&html, "class=\"unknown-block\""), 1);
    assert!(html.contains("data-block-type=\"text\""));
}

#[test]
fn editing_mode_frames_every_registered_block() {
    let html = render_blocks(sample_sequence(), BlockRegistry::with_defaults(), true);

    assert_eq!(count(&html, "class=\"block-edit\""), 3);
    assert_eq!(count(&html, "class=\"block-delete\""), 3);
}

#[test]
fn read_mode_has_no_editing_chrome() {
    let html = render_blocks(sample_sequence(), BlockRegistry::with_defaults(), false);

    assert_eq!(count(&html, "class=\"block-edit\""), 0);
    assert_eq!(count(&html, "class=\"block-delete\""), 0);
}

#[test]
fn placeholders_stay_bare_in_editing_mode() {
    let blocks = vec![Block::new("x", "mystery", json!({}))];
    let html = render_blocks(blocks, BlockRegistry::with_defaults(), true);

    assert_eq!(count(&html, "class=\"unknown-block\""), 1);
    assert_eq!(count(&html, "class=\"block-edit\""), 0);
}

#[test]
fn malformed_quiz_fails_closed_without_affecting_siblings() {
    let blocks = vec![
        Block::new(
            "q-broken",
            kinds::QUIZ,
            json!({
                "question": "?",
                "type": "multiple-choice",
                "options": [{ "id": "a", "text": "A", "correct": false }],
                "points": 1
            }),
        ),
        text_block("t1", "still standing"),
    ];

    let html = render_blocks(blocks, BlockRegistry::with_defaults(), false);

    assert!(html.contains("invalid-block"));
    assert!(html.contains("no option is marked correct"));
    assert!(html.contains("still standing"));
}

#[test]
fn dispatch_does_not_mutate_the_input_sequence() {
    let blocks = sample_sequence();
    let snapshot = blocks.clone();

    let _ = render_blocks(blocks.clone(), BlockRegistry::with_defaults(), true);

    assert_eq!(blocks, snapshot);
}
