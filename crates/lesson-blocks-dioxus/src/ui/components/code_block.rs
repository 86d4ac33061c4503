use dioxus::core::Task;
use dioxus::prelude::*;
use lesson_blocks_engine::blocks::{Block, CodeContent};
use lesson_blocks_engine::exec::{RunOutcome, RunRequest, StubExecutor};

use crate::platform::clipboard::{ClipboardSink, SystemClipboard};
use crate::ui::components::invalid_block::InvalidBlock;
use crate::ui::registry::BlockViewProps;

#[derive(Debug, Clone, PartialEq)]
enum RunState {
    Idle,
    Running,
    Finished(RunOutcome),
}

/// Renderer for `code` blocks.
///
/// The code body is shown (and copied) verbatim. Copy failures surface as a
/// dismissible notice instead of an unhandled error. When the block is
/// executable, Run spawns the simulated backend on this component's scope:
/// starting a new run cancels the previous task, and unmounting (or the
/// dispatcher remounting under a new `kind:id` key) cancels it outright, so
/// a resolution can never land on a disposed instance.
#[component]
pub fn CodeBlock(block: Block) -> Element {
    let mut run_state = use_signal(|| RunState::Idle);
    let mut run_task = use_signal(|| None::<Task>);
    let mut notice = use_signal(|| None::<String>);
    let mut copied = use_signal(|| false);
    let mut clipboard = use_signal(SystemClipboard::new);

    let content = match block.content_as::<CodeContent>() {
        Ok(content) => content,
        Err(err) => {
            return rsx! {
                InvalidBlock { id: block.id.clone(), message: err.to_string() }
            };
        }
    };

    let code_for_copy = content.code.clone();
    let on_copy = move |_| match clipboard.write().set_text(&code_for_copy) {
        Ok(()) => {
            copied.set(true);
            notice.set(None);
        }
        Err(err) => {
            copied.set(false);
            notice.set(Some(format!("Copy failed: {err}")));
        }
    };

    let request = RunRequest {
        code: content.code.clone(),
        language: content.language.clone(),
    };
    let on_run = move |_| {
        if *run_state.read() == RunState::Running {
            return;
        }
        let previous = run_task.write().take();
        if let Some(task) = previous {
            task.cancel();
        }
        run_state.set(RunState::Running);
        let request = request.clone();
        let task = spawn(async move {
            let outcome = StubExecutor::new().run(request).await;
            run_state.set(RunState::Finished(outcome));
            run_task.set(None);
        });
        run_task.set(Some(task));
    };

    let running = *run_state.read() == RunState::Running;
    let copy_label = if copied() { "Copied" } else { "Copy" };

    rsx! {
        div { class: "code-block",
            div { class: "code-header",
                span { class: "code-title", "{content.display_name()}" }
                div { class: "code-actions",
                    button { class: "code-copy", onclick: on_copy, "{copy_label}" }
                    if content.executable {
                        button {
                            class: "code-run",
                            disabled: running,
                            onclick: on_run,
                            "Run"
                        }
                    }
                }
            }
            pre {
                code { class: "language-{content.language}", "{content.code}" }
            }
            if let Some(message) = notice() {
                div { class: "copy-notice",
                    span { "{message}" }
                    button {
                        class: "copy-notice-dismiss",
                        onclick: move |_| notice.set(None),
                        "Dismiss"
                    }
                }
            }
            {run_output(&run_state.read())}
        }
    }
}

fn run_output(state: &RunState) -> Element {
    match state {
        RunState::Idle => rsx! {},
        RunState::Running => rsx! {
            div { class: "run-output running", "Running…" }
        },
        RunState::Finished(RunOutcome::Success { output }) => rsx! {
            div { class: "run-output success",
                pre { "{output}" }
            }
        },
        RunState::Finished(RunOutcome::Failure { message }) => rsx! {
            div { class: "run-output failure", "{message}" }
        },
    }
}

pub fn code_block_view(props: BlockViewProps) -> Element {
    rsx! {
        CodeBlock { block: props.block }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use serde_json::json;

    fn render_code(content: serde_json::Value) -> String {
        let block = Block::new("c1", "code", content);
        let mut dom = VirtualDom::new_with_props(CodeBlock, CodeBlockProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn header_prefers_the_filename() {
        let html = render_code(json!({
            "code": "print('hi')",
            "language": "python",
            "filename": "hello.py"
        }));

        assert!(html.contains("hello.py"));
        assert!(html.contains("language-python"));
        assert!(html.contains("print("));
    }

    #[test]
    fn header_falls_back_to_the_language() {
        let html = render_code(json!({ "code": "SELECT 1;", "language": "sql" }));
        assert!(html.contains("code-title"));
        assert!(html.contains("sql"));
    }

    #[test]
    fn run_action_exists_only_for_executable_blocks() {
        let inert = render_code(json!({ "code": "x", "language": "rust" }));
        assert!(!inert.contains("code-run"));

        let runnable = render_code(json!({
            "code": "x",
            "language": "rust",
            "executable": true
        }));
        assert!(runnable.contains("code-run"));
        assert!(runnable.contains("Run"));
    }

    #[test]
    fn copy_action_is_always_offered() {
        let html = render_code(json!({ "code": "x", "language": "rust" }));
        assert!(html.contains("code-copy"));
        assert!(html.contains("Copy"));
        // No notice until a copy actually fails.
        assert!(!html.contains("copy-notice"));
    }

    #[test]
    fn malformed_content_fails_closed() {
        let html = render_code(json!({ "language": "rust" }));
        assert!(html.contains("invalid-block"));
        assert!(!html.contains("code-block"));
    }
}
