use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::QuizError;
use crate::model::{Question, QuestionRecord};

/// Discrete inputs accepted by the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Questions arrived from the source. An empty list counts as a failed load.
    DataReceived { questions: Vec<Question> },
    /// The source was unreachable or returned an unusable payload.
    DataFailed,
    /// Leave the error screen and wait for another load attempt.
    Retry,
    Start,
    Answer { option_index: usize },
    Next,
    /// One second elapsed on the external timer.
    Tick,
    Finish,
    Restart,
}

/// Payload-free tag of an [`Event`], used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DataReceived,
    DataFailed,
    Retry,
    Start,
    Answer,
    Next,
    Tick,
    Finish,
    Restart,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::DataReceived => "dataReceived",
            EventKind::DataFailed => "dataFailed",
            EventKind::Retry => "retry",
            EventKind::Start => "start",
            EventKind::Answer => "newAnswer",
            EventKind::Next => "nextQuestion",
            EventKind::Tick => "tick",
            EventKind::Finish => "finish",
            EventKind::Restart => "restart",
        }
    }

    /// Resolve a wire type name. Accepts the short aliases `answer` and `next`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dataReceived" => Some(EventKind::DataReceived),
            "dataFailed" => Some(EventKind::DataFailed),
            "retry" => Some(EventKind::Retry),
            "start" => Some(EventKind::Start),
            "newAnswer" | "answer" => Some(EventKind::Answer),
            "nextQuestion" | "next" => Some(EventKind::Next),
            "tick" => Some(EventKind::Tick),
            "finish" => Some(EventKind::Finish),
            "restart" => Some(EventKind::Restart),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped event as it arrives over JSON: `{ "type": "...", "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl Event {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::DataReceived { .. } => EventKind::DataReceived,
            Event::DataFailed => EventKind::DataFailed,
            Event::Retry => EventKind::Retry,
            Event::Start => EventKind::Start,
            Event::Answer { .. } => EventKind::Answer,
            Event::Next => EventKind::Next,
            Event::Tick => EventKind::Tick,
            Event::Finish => EventKind::Finish,
            Event::Restart => EventKind::Restart,
        }
    }

    /// Decode an untyped event.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownEvent` for a type name outside the transition
    /// table and `QuizError::InvalidPayload` when the payload does not fit the type.
    pub fn from_wire(wire: WireEvent) -> Result<Self, QuizError> {
        let kind = EventKind::from_name(&wire.kind).ok_or(QuizError::UnknownEvent(wire.kind))?;

        let event = match kind {
            EventKind::DataReceived => Event::DataReceived {
                questions: decode_questions(wire.payload)?,
            },
            EventKind::DataFailed => Event::DataFailed,
            EventKind::Retry => Event::Retry,
            EventKind::Start => Event::Start,
            EventKind::Answer => Event::Answer {
                option_index: decode_option_index(&wire.payload)?,
            },
            EventKind::Next => Event::Next,
            EventKind::Tick => Event::Tick,
            EventKind::Finish => Event::Finish,
            EventKind::Restart => Event::Restart,
        };
        Ok(event)
    }
}

fn decode_questions(payload: Value) -> Result<Vec<Question>, QuizError> {
    let invalid = |reason: String| QuizError::InvalidPayload {
        event: EventKind::DataReceived,
        reason,
    };

    let records: Vec<QuestionRecord> =
        serde_json::from_value(payload).map_err(|err| invalid(err.to_string()))?;

    // An empty list is a valid payload here; the machine turns it into an error status.
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record).map_err(|err| invalid(format!("question {index}: {err}")))
        })
        .collect()
}

fn decode_option_index(payload: &Value) -> Result<usize, QuizError> {
    payload
        .as_u64()
        .and_then(|value| usize::try_from(value).ok())
        .ok_or_else(|| QuizError::InvalidPayload {
            event: EventKind::Answer,
            reason: format!("expected a non-negative option index, got {payload}"),
        })
}
