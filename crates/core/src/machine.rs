//! Quiz progression as a pure transition function over an owned [`Session`].

use std::sync::Arc;

use crate::error::QuizError;
use crate::event::{Event, EventKind, WireEvent};
use crate::model::{Session, Status};

/// Countdown budget granted per question when a quiz starts.
pub const SECS_PER_QUESTION: u32 = 30;

/// Tunables applied by the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRules {
    pub seconds_per_question: u32,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            seconds_per_question: SECS_PER_QUESTION,
        }
    }
}

impl QuizRules {
    #[must_use]
    pub fn with_seconds_per_question(mut self, seconds: u32) -> Self {
        self.seconds_per_question = seconds;
        self
    }

    fn time_limit(self, num_questions: usize) -> u32 {
        u32::try_from(num_questions)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.seconds_per_question)
    }
}

/// Compute the session that follows `event`.
///
/// The input is never modified. Guard violations (a second answer, `Next`
/// before answering, an event outside its source status) are rejected with an
/// error instead of being ignored. `Tick` outside an active quiz is the one
/// accepted no-op, since a timer may still fire once after the quiz ended.
///
/// # Errors
///
/// Returns `QuizError` if the event is not allowed for the current status or
/// its guard does not hold.
pub fn transition(session: &Session, rules: &QuizRules, event: Event) -> Result<Session, QuizError> {
    let kind = event.kind();
    let status = session.status;
    let reject = || QuizError::InvalidTransition {
        event: kind,
        status,
    };

    match (status, event) {
        (Status::Loading, Event::DataReceived { questions }) => {
            if questions.is_empty() {
                return Ok(Session {
                    status: Status::Error,
                    ..session.clone()
                });
            }
            Ok(Session {
                questions: Arc::from(questions),
                status: Status::Ready,
                ..session.clone()
            })
        }

        (Status::Loading, Event::DataFailed) => Ok(Session {
            status: Status::Error,
            ..session.clone()
        }),

        (Status::Error, Event::Retry) => Ok(Session {
            status: Status::Loading,
            ..session.clone()
        }),

        (Status::Ready, Event::Start) => {
            let started = Session {
                status: Status::Active,
                current_index: 0,
                selected_answer: None,
                score: 0,
                seconds_remaining: Some(rules.time_limit(session.questions.len())),
                ..session.clone()
            };
            // An active quiz always has time left; a zero budget is already over.
            if started.seconds_remaining == Some(0) {
                return Ok(finish(&started));
            }
            Ok(started)
        }

        (Status::Active, Event::Answer { option_index }) => answer(session, option_index),

        (Status::Active, Event::Next) => next(session),

        (Status::Active, Event::Tick) => Ok(tick(session)),
        (_, Event::Tick) => Ok(session.clone()),

        (Status::Active | Status::Ready, Event::Finish) => Ok(finish(session)),

        (Status::Finished, Event::Restart) => Ok(Session {
            questions: Arc::clone(&session.questions),
            status: Status::Ready,
            high_score: session.high_score,
            ..Session::new()
        }),

        _ => Err(reject()),
    }
}

fn answer(session: &Session, option_index: usize) -> Result<Session, QuizError> {
    let index = session.current_index;
    if session.selected_answer.is_some() {
        return Err(QuizError::AlreadyAnswered { index });
    }
    let question = session
        .questions
        .get(index)
        .ok_or(QuizError::InvalidTransition {
            event: EventKind::Answer,
            status: session.status,
        })?;
    let len = question.options().len();
    if option_index >= len {
        return Err(QuizError::OptionOutOfRange {
            index,
            option: option_index,
            len,
        });
    }

    let score = if question.is_correct(option_index) {
        session.score.saturating_add(question.points())
    } else {
        session.score
    };

    Ok(Session {
        selected_answer: Some(option_index),
        score,
        ..session.clone()
    })
}

fn next(session: &Session) -> Result<Session, QuizError> {
    if session.selected_answer.is_none() {
        return Err(QuizError::NotAnswered {
            index: session.current_index,
        });
    }
    if session.is_last_question() {
        return Ok(finish(session));
    }

    Ok(Session {
        current_index: session.current_index + 1,
        selected_answer: None,
        ..session.clone()
    })
}

fn tick(session: &Session) -> Session {
    match session.seconds_remaining {
        Some(secs) if secs > 1 => Session {
            seconds_remaining: Some(secs - 1),
            ..session.clone()
        },
        // Reaching zero ends the quiz; the countdown is cleared with the status.
        _ => finish(session),
    }
}

fn finish(session: &Session) -> Session {
    Session {
        status: Status::Finished,
        high_score: session.high_score.max(session.score),
        seconds_remaining: None,
        ..session.clone()
    }
}

//
// ─── MACHINE ───────────────────────────────────────────────────────────────────
//

/// Owner of the single live [`Session`].
///
/// Callers serialize access through `&mut self`; there is no internal locking.
#[derive(Debug, Clone, Default)]
pub struct QuizMachine {
    session: Session,
    rules: QuizRules,
}

impl QuizMachine {
    #[must_use]
    pub fn new(rules: QuizRules) -> Self {
        Self {
            session: Session::new(),
            rules,
        }
    }

    /// Read-only snapshot of the current session.
    #[must_use]
    pub fn current_state(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn rules(&self) -> QuizRules {
        self.rules
    }

    /// Apply one event. On error the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the event is rejected by the transition table.
    pub fn submit(&mut self, event: Event) -> Result<(), QuizError> {
        self.session = transition(&self.session, &self.rules, event)?;
        Ok(())
    }

    /// Decode and apply an untyped event.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownEvent` for unrecognized type names, plus any
    /// error `submit` can return.
    pub fn submit_wire(&mut self, wire: WireEvent) -> Result<(), QuizError> {
        self.submit(Event::from_wire(wire)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn question(correct: usize, points: u32) -> Question {
        Question::new(
            "q",
            vec!["a".into(), "b".into(), "c".into()],
            correct,
            points,
        )
        .unwrap()
    }

    fn ready_machine(questions: Vec<Question>) -> QuizMachine {
        let mut machine = QuizMachine::default();
        machine
            .submit(Event::DataReceived { questions })
            .unwrap();
        machine
    }

    fn active_machine(questions: Vec<Question>) -> QuizMachine {
        let mut machine = ready_machine(questions);
        machine.submit(Event::Start).unwrap();
        machine
    }

    #[test]
    fn data_received_moves_to_ready() {
        let machine = ready_machine(vec![question(0, 10)]);
        assert_eq!(machine.current_state().status(), Status::Ready);
        assert_eq!(machine.current_state().num_questions(), 1);
    }

    #[test]
    fn empty_question_list_is_an_error() {
        let mut machine = QuizMachine::default();
        machine
            .submit(Event::DataReceived { questions: vec![] })
            .unwrap();
        assert_eq!(machine.current_state().status(), Status::Error);
        assert_eq!(machine.current_state().num_questions(), 0);
    }

    #[test]
    fn data_failed_moves_to_error_and_retry_back_to_loading() {
        let mut machine = QuizMachine::default();
        machine.submit(Event::DataFailed).unwrap();
        assert_eq!(machine.current_state().status(), Status::Error);

        machine.submit(Event::Retry).unwrap();
        assert_eq!(machine.current_state().status(), Status::Loading);
    }

    #[test]
    fn start_sets_countdown_from_question_count() {
        let machine = active_machine(vec![question(0, 10), question(1, 10), question(2, 10)]);
        let state = machine.current_state();
        assert_eq!(state.status(), Status::Active);
        assert_eq!(state.seconds_remaining(), Some(90));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.selected_answer(), None);
    }

    #[test]
    fn start_honors_custom_rules() {
        let mut machine = QuizMachine::new(QuizRules::default().with_seconds_per_question(5));
        machine
            .submit(Event::DataReceived {
                questions: vec![question(0, 1), question(0, 1)],
            })
            .unwrap();
        machine.submit(Event::Start).unwrap();
        assert_eq!(machine.current_state().seconds_remaining(), Some(10));
    }

    #[test]
    fn second_answer_is_rejected_without_change() {
        let mut machine = active_machine(vec![question(0, 10), question(0, 10)]);
        machine.submit(Event::Answer { option_index: 0 }).unwrap();
        let before = machine.current_state().clone();

        let err = machine.submit(Event::Answer { option_index: 1 }).unwrap_err();

        assert_eq!(err, QuizError::AlreadyAnswered { index: 0 });
        assert_eq!(machine.current_state(), &before);
        assert_eq!(machine.current_state().score(), 10);
    }

    #[test]
    fn next_without_answer_is_rejected() {
        let mut machine = active_machine(vec![question(0, 10), question(0, 10)]);
        let err = machine.submit(Event::Next).unwrap_err();
        assert_eq!(err, QuizError::NotAnswered { index: 0 });
        assert_eq!(machine.current_state().current_index(), 0);
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut machine = active_machine(vec![question(0, 10)]);
        let err = machine.submit(Event::Answer { option_index: 3 }).unwrap_err();
        assert_eq!(
            err,
            QuizError::OptionOutOfRange {
                index: 0,
                option: 3,
                len: 3
            }
        );
        assert!(!machine.current_state().has_answered());
    }

    #[test]
    fn zero_point_question_counts_as_correct_without_score() {
        let mut machine = active_machine(vec![question(2, 0)]);
        machine.submit(Event::Answer { option_index: 2 }).unwrap();
        assert_eq!(machine.current_state().score(), 0);
        assert_eq!(machine.current_state().selected_answer(), Some(2));
    }

    #[test]
    fn events_outside_their_status_are_rejected() {
        let mut machine = QuizMachine::default();
        let err = machine.submit(Event::Start).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                event: EventKind::Start,
                status: Status::Loading
            }
        );

        let mut machine = ready_machine(vec![question(0, 1)]);
        assert!(machine.submit(Event::Answer { option_index: 0 }).is_err());
        assert!(machine.submit(Event::Restart).is_err());
        assert!(machine.submit(Event::DataFailed).is_err());
        assert_eq!(machine.current_state().status(), Status::Ready);
    }

    #[test]
    fn finish_from_ready_records_high_score() {
        let mut machine = ready_machine(vec![question(0, 1)]);
        machine.submit(Event::Finish).unwrap();
        assert_eq!(machine.current_state().status(), Status::Finished);
        assert_eq!(machine.current_state().high_score(), 0);
    }

    #[test]
    fn tick_before_start_is_ignored() {
        let mut machine = ready_machine(vec![question(0, 1)]);
        machine.submit(Event::Tick).unwrap();
        assert_eq!(machine.current_state().status(), Status::Ready);
        assert_eq!(machine.current_state().seconds_remaining(), None);
    }

    #[test]
    fn zero_time_budget_finishes_on_start() {
        let mut machine = QuizMachine::new(QuizRules::default().with_seconds_per_question(0));
        machine
            .submit(Event::DataReceived {
                questions: vec![question(0, 5), question(1, 5)],
            })
            .unwrap();

        machine.submit(Event::Start).unwrap();
        let state = machine.current_state();
        assert_eq!(state.status(), Status::Finished);
        assert_eq!(state.seconds_remaining(), None);
        assert_eq!(state.score(), 0);

        let finished = state.clone();
        machine.submit(Event::Tick).unwrap();
        assert_eq!(machine.current_state(), &finished);
    }

    #[test]
    fn restart_keeps_questions_and_high_score() {
        let mut machine = active_machine(vec![question(0, 7)]);
        machine.submit(Event::Answer { option_index: 0 }).unwrap();
        machine.submit(Event::Next).unwrap();
        assert_eq!(machine.current_state().high_score(), 7);

        machine.submit(Event::Restart).unwrap();
        let state = machine.current_state();
        assert_eq!(state.status(), Status::Ready);
        assert_eq!(state.score(), 0);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.selected_answer(), None);
        assert_eq!(state.seconds_remaining(), None);
        assert_eq!(state.high_score(), 7);
        assert_eq!(state.num_questions(), 1);
    }

    #[test]
    fn lower_score_does_not_reduce_high_score() {
        let mut machine = active_machine(vec![question(0, 7)]);
        machine.submit(Event::Answer { option_index: 0 }).unwrap();
        machine.submit(Event::Next).unwrap();
        machine.submit(Event::Restart).unwrap();
        machine.submit(Event::Start).unwrap();
        machine.submit(Event::Answer { option_index: 1 }).unwrap();
        machine.submit(Event::Next).unwrap();

        assert_eq!(machine.current_state().score(), 0);
        assert_eq!(machine.current_state().high_score(), 7);
    }

    #[test]
    fn transition_does_not_touch_input() {
        let machine = active_machine(vec![question(0, 5)]);
        let before = machine.current_state().clone();
        let after = transition(&before, &machine.rules(), Event::Answer { option_index: 0 }).unwrap();
        assert_eq!(before.score(), 0);
        assert_eq!(after.score(), 5);
    }
}
