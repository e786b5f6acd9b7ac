use thiserror::Error;

use crate::event::EventKind;
use crate::model::Status;

/// Errors returned by the quiz state machine.
///
/// Every variant leaves the session untouched: a rejected event is never
/// partially applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    #[error("invalid payload for `{event}`: {reason}")]
    InvalidPayload { event: EventKind, reason: String },

    #[error("`{event}` is not allowed while the quiz is {status}")]
    InvalidTransition { event: EventKind, status: Status },

    #[error("question {index} already has an answer")]
    AlreadyAnswered { index: usize },

    #[error("question {index} has no answer yet")]
    NotAnswered { index: usize },

    #[error("option {option} is out of range for question {index} ({len} options)")]
    OptionOutOfRange {
        index: usize,
        option: usize,
        len: usize,
    },
}

impl QuizError {
    /// True for errors caused by an event the machine does not know at all.
    #[must_use]
    pub fn is_unknown_event(&self) -> bool {
        matches!(self, QuizError::UnknownEvent(_))
    }
}
