use std::sync::Arc;

use rand::seq::SliceRandom;

use quiz_core::{Event, Question, QuizError, QuizMachine, QuizRules};

use crate::error::LoadError;
use crate::question_source::QuestionSource;

/// What happened when questions were loaded into a machine.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed(LoadError),
}

impl LoadOutcome {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Connects a question source to quiz machines.
///
/// Load failures never surface as Rust errors here: they become `DataFailed`,
/// so the machine's `error` status is the single record of them.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn QuestionSource>,
    rules: QuizRules,
    shuffle: bool,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            rules: QuizRules::default(),
            shuffle: false,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: QuizRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn rules(&self) -> QuizRules {
        self.rules
    }

    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// A machine in the loading state, configured with this service's rules.
    #[must_use]
    pub fn new_machine(&self) -> QuizMachine {
        QuizMachine::new(self.rules)
    }

    /// Fetch questions from the source, shuffling them when enabled.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` from the underlying source.
    pub async fn load_questions(&self) -> Result<Vec<Question>, LoadError> {
        let source = self.source.describe();
        tracing::debug!(%source, "loading questions");

        let mut questions = self.source.load().await?;
        if self.shuffle {
            questions.shuffle(&mut rand::rng());
        }

        tracing::info!(%source, count = questions.len(), "questions loaded");
        Ok(questions)
    }

    /// Feed the result of a load into the machine as `DataReceived` or `DataFailed`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the machine is not waiting for data.
    pub fn apply_load(
        machine: &mut QuizMachine,
        result: Result<Vec<Question>, LoadError>,
    ) -> Result<LoadOutcome, QuizError> {
        match result {
            Ok(questions) => {
                let count = questions.len();
                machine.submit(Event::DataReceived { questions })?;
                Ok(LoadOutcome::Loaded { count })
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load questions");
                machine.submit(Event::DataFailed)?;
                Ok(LoadOutcome::Failed(err))
            }
        }
    }

    /// Load questions and apply them to `machine` in one step.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the machine is not waiting for data.
    pub async fn load_into(&self, machine: &mut QuizMachine) -> Result<LoadOutcome, QuizError> {
        let result = self.load_questions().await;
        Self::apply_load(machine, result)
    }
}
