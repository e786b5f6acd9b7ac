use std::sync::Arc;

use dioxus::core::Task;
use dioxus::prelude::*;

use quiz_core::{Event, EventKind, QuizError, Status};
use services::{QuizLoopService, TICK_PERIOD, drive_ticks, tick_machine};

use crate::context::AppContext;
use crate::vm::{map_finish, map_progress, map_question};

use super::components::{
    ErrorMessage, FatalPanel, FinishScreen, Header, Loader, NextButton, ProgressHeader,
    QuestionCard, StartScreen, Timer,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole quiz page. Owns the machine; every change goes through `dispatch`.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let title = ctx.title().to_string();

    let machine = use_signal(|| quiz_loop.new_machine());
    let fatal = use_signal(|| None::<QuizError>);
    let ticker = use_signal(|| None::<Task>);

    let load = {
        let quiz_loop = Arc::clone(&quiz_loop);
        use_callback(move |()| {
            let quiz_loop = Arc::clone(&quiz_loop);
            let mut machine = machine;
            let mut fatal = fatal;
            spawn(async move {
                let result = quiz_loop.load_questions().await;
                let applied = QuizLoopService::apply_load(&mut machine.write(), result);
                if let Err(err) = applied {
                    tracing::error!(error = %err, "loaded questions were rejected");
                    fatal.set(Some(err));
                }
            });
        })
    };
    use_hook(move || load.call(()));

    let dispatch = use_callback(move |event: Event| {
        let mut machine = machine;
        let mut fatal = fatal;
        let mut ticker = ticker;
        let kind = event.kind();

        let result = machine.write().submit(event);
        if let Err(err) = result {
            tracing::warn!(event = %kind, error = %err, "quiz event rejected");
            fatal.set(Some(err));
            return;
        }
        tracing::debug!(event = %kind, status = %machine.peek().current_state().status(), "quiz event applied");

        let starting = kind == EventKind::Start;
        if starting || !machine.peek().current_state().is_active() {
            if let Some(task) = ticker.write().take() {
                task.cancel();
            }
        }
        if starting {
            let task = spawn(async move {
                let mut machine = machine;
                drive_ticks(TICK_PERIOD, move || tick_machine(&mut machine.write())).await;
            });
            ticker.set(Some(task));
        }
    });

    let retry = use_callback(move |()| {
        dispatch.call(Event::Retry);
        if machine.peek().current_state().status() == Status::Loading {
            load.call(());
        }
    });

    #[cfg(test)]
    use_hook(move || {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(dispatch);
        }
    });

    let (status, num_questions, progress, question, seconds_remaining, finish) = {
        let guard = machine.read();
        let session = guard.current_state();
        (
            session.status(),
            session.num_questions(),
            map_progress(session),
            map_question(session),
            session.seconds_remaining().unwrap_or(0),
            map_finish(session),
        )
    };
    let fatal_message = fatal.read().as_ref().map(ToString::to_string);

    let body = if let Some(message) = fatal_message {
        rsx! {
            FatalPanel { message }
        }
    } else {
        match status {
            Status::Loading => rsx! {
                Loader {}
            },
            Status::Error => rsx! {
                ErrorMessage { on_retry: retry }
            },
            Status::Ready => rsx! {
                StartScreen { num_questions, on_event: dispatch }
            },
            Status::Active => rsx! {
                if let Some(progress) = progress {
                    ProgressHeader { progress }
                }
                if let Some(question) = question {
                    QuestionCard { question: question.clone(), on_event: dispatch }
                    footer { class: "quiz-footer",
                        Timer { seconds_remaining }
                        NextButton {
                            has_answered: question.has_answered,
                            is_last: question.is_last,
                            on_event: dispatch,
                        }
                    }
                }
            },
            Status::Finished => rsx! {
                FinishScreen { summary: finish, on_event: dispatch }
            },
        }
    };

    rsx! {
        div { class: "quiz",
            Header { title }
            main { class: "main", {body} }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<Event>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<Event>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<Event> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
