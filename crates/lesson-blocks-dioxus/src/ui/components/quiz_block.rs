use dioxus::prelude::*;
use lesson_blocks_engine::blocks::{Block, QuizContent, QuizOption, QuizSession};

use crate::ui::components::invalid_block::InvalidBlock;
use crate::ui::registry::BlockViewProps;

/// Renderer for `quiz` blocks.
///
/// The selection/submission state machine lives in [`QuizSession`] and is
/// scoped to this instance, so a remount (new block id) starts clean.
/// Content is validated before any interaction; a broken answer key renders
/// the error card rather than a quiz that can only grade wrong.
#[component]
pub fn QuizBlock(block: Block) -> Element {
    let mut session = use_signal(QuizSession::new);

    let content = match block.content_as::<QuizContent>() {
        Ok(content) => content,
        Err(err) => {
            return rsx! {
                InvalidBlock { id: block.id.clone(), message: err.to_string() }
            };
        }
    };
    if let Err(err) = content.validate() {
        return rsx! {
            InvalidBlock { id: block.id.clone(), message: err.to_string() }
        };
    }

    let submitted = session.read().is_submitted();
    let has_selection = !session.read().selected().is_empty();
    let correct = submitted && session.read().is_correct(&content);

    rsx! {
        div { class: "quiz-block",
            p { class: "quiz-question", "{content.question}" }
            ul { class: "quiz-options",
                for option in content.options.iter() {
                    QuizOptionRow {
                        key: "{option.id}",
                        option: option.clone(),
                        selected: session.read().is_selected(&option.id),
                        submitted,
                        on_select: {
                            let id = option.id.clone();
                            move |_| session.write().select(&id)
                        },
                    }
                }
            }
            if !submitted {
                button {
                    class: "quiz-submit",
                    disabled: !has_selection,
                    onclick: move |_| {
                        session.write().submit();
                    },
                    "Submit"
                }
            } else {
                QuizResultBanner {
                    correct,
                    points: content.points,
                    explanation: content.explanation.clone(),
                }
            }
        }
    }
}

/// One answer option. After submission the row states two independent
/// facts: whether this option is the correct answer, and whether the
/// learner picked it.
#[component]
pub fn QuizOptionRow(
    option: QuizOption,
    selected: bool,
    submitted: bool,
    on_select: Callback<()>,
) -> Element {
    let mut class = String::from("quiz-option");
    if selected {
        class.push_str(" selected");
    }
    if submitted {
        class.push_str(if option.correct {
            " correct"
        } else {
            " incorrect"
        });
    }

    rsx! {
        li { class: "{class}",
            button {
                class: "quiz-option-choice",
                disabled: submitted,
                onclick: move |_| on_select.call(()),
                span { class: "quiz-option-text", "{option.text}" }
                if submitted && option.correct {
                    span { class: "quiz-option-mark", "✓" }
                }
                if submitted && !option.correct && selected {
                    span { class: "quiz-option-mark", "✗" }
                }
            }
            if submitted {
                if let Some(ref explanation) = option.explanation {
                    p { class: "quiz-option-explanation", "{explanation}" }
                }
            }
        }
    }
}

#[component]
fn QuizResultBanner(correct: bool, points: u32, explanation: Option<String>) -> Element {
    let class = if correct {
        "quiz-result correct"
    } else {
        "quiz-result incorrect"
    };

    rsx! {
        div { class: "{class}",
            if correct {
                span { class: "quiz-result-heading", "Correct! +{points} points" }
            } else {
                span { class: "quiz-result-heading", "Incorrect" }
            }
            if let Some(ref explanation) = explanation {
                p { class: "quiz-result-explanation", "{explanation}" }
            }
        }
    }
}

pub fn quiz_block_view(props: BlockViewProps) -> Element {
    rsx! {
        QuizBlock { block: props.block }
    }
}
