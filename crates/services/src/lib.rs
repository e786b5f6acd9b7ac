#![forbid(unsafe_code)]

pub mod error;
pub mod question_source;
pub mod quiz_loop;
pub mod ticker;

pub use error::{LoadError, SourceConfigError};
pub use question_source::{
    FileQuestionSource, HttpQuestionSource, QuestionSource, QuestionSourceConfig,
    StaticQuestionSource,
};
pub use quiz_loop::{LoadOutcome, QuizLoopService};
pub use ticker::{TICK_PERIOD, TickFlow, drive_ticks, tick_machine};
