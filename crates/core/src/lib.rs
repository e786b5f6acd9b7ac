#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod machine;
pub mod model;

pub use error::QuizError;
pub use event::{Event, EventKind, WireEvent};
pub use machine::{QuizMachine, QuizRules, SECS_PER_QUESTION, transition};
pub use model::{Question, QuestionError, QuestionListError, QuestionRecord, Session, Status};
