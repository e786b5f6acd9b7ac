use dioxus::prelude::*;

use quiz_core::Event;

use crate::vm::{FinishVm, OptionVm, ProgressVm, QuestionVm, format_timer};

#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "{title}" }
        }
    }
}

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader-container",
            div { class: "loader" }
            p { "Loading questions..." }
        }
    }
}

#[component]
pub fn ErrorMessage(on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error",
            p {
                span { "💥" }
                " There was an error fetching questions."
            }
            button {
                class: "btn btn-ui",
                id: "quiz-retry",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[component]
pub fn FatalPanel(message: String) -> Element {
    rsx! {
        div { class: "fatal",
            h2 { "The quiz stopped" }
            pre { "{message}" }
        }
    }
}

#[component]
pub fn StartScreen(num_questions: usize, on_event: EventHandler<Event>) -> Element {
    rsx! {
        div { class: "start",
            h2 { "Welcome to the Quiz!" }
            h3 { "{num_questions} questions to test your knowledge" }
            button {
                class: "btn btn-ui",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_event.call(Event::Start),
                "Let's start"
            }
        }
    }
}

#[component]
pub fn ProgressHeader(progress: ProgressVm) -> Element {
    rsx! {
        header { class: "progress",
            progress {
                max: "{progress.num_questions}",
                value: "{progress.progress_value}",
            }
            p {
                "Question "
                strong { "{progress.question_number}" }
                " / {progress.num_questions}"
            }
            p {
                strong { "{progress.score}" }
                " / {progress.max_possible_points} points"
            }
        }
    }
}

#[component]
pub fn QuestionCard(question: QuestionVm, on_event: EventHandler<Event>) -> Element {
    rsx! {
        div { class: "question",
            h4 { "{question.text}" }
            div { class: "options",
                for option in question.options {
                    OptionButton { key: "{option.index}", option: option.clone(), on_event }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_event: EventHandler<Event>) -> Element {
    let class = option.class();
    let disabled = option.disabled();
    let option_index = option.index;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| on_event.call(Event::Answer { option_index }),
            "{option.label}"
        }
    }
}

#[component]
pub fn Timer(seconds_remaining: u32) -> Element {
    let label = format_timer(seconds_remaining);
    rsx! {
        div { class: "timer", "{label}" }
    }
}

#[component]
pub fn NextButton(has_answered: bool, is_last: bool, on_event: EventHandler<Event>) -> Element {
    if !has_answered {
        return rsx! {};
    }
    let label = if is_last { "Finish" } else { "Next" };

    rsx! {
        button {
            class: "btn btn-ui",
            id: "quiz-next",
            r#type: "button",
            onclick: move |_| on_event.call(Event::Next),
            "{label}"
        }
    }
}

#[component]
pub fn FinishScreen(summary: FinishVm, on_event: EventHandler<Event>) -> Element {
    rsx! {
        div { class: "finish",
            p { class: "result",
                span { "{summary.emoji}" }
                " You scored "
                strong { "{summary.score}" }
                " out of {summary.max_possible_points} ({summary.percentage}%)"
            }
            p { class: "highscore", "(Highscore: {summary.high_score} points)" }
            button {
                class: "btn btn-ui",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_event.call(Event::Restart),
                "Restart quiz"
            }
        }
    }
}
