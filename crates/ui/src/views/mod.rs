mod components;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{
    ErrorMessage, FatalPanel, FinishScreen, Header, Loader, NextButton, ProgressHeader,
    QuestionCard, StartScreen, Timer,
};
pub use quiz::QuizView;
