use std::fmt;
use std::sync::Arc;

use crate::model::Question;

/// Top-level phase of a quiz session. Decides which view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Loading,
    Error,
    Ready,
    Active,
    Finished,
}

impl Status {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Loading => "loading",
            Status::Error => "error",
            Status::Ready => "ready",
            Status::Active => "active",
            Status::Finished => "finished",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full quiz state at one point in time.
///
/// Only the transition function in [`crate::machine`] builds new sessions, so
/// the field invariants hold for every value a caller can observe:
/// `seconds_remaining` is `Some` iff the status is `Active`, `selected_answer`
/// is `None` right after `Start`/`Next`, and `high_score` never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) questions: Arc<[Question]>,
    pub(crate) status: Status,
    pub(crate) current_index: usize,
    pub(crate) selected_answer: Option<usize>,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) seconds_remaining: Option<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session waiting for its questions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Arc::from(Vec::new()),
            status: Status::Loading,
            current_index: 0,
            selected_answer: None,
            score: 0,
            high_score: 0,
            seconds_remaining: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> Option<u32> {
        self.seconds_remaining
    }

    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Sum of every question's points.
    #[must_use]
    pub fn max_possible_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0_u32, |acc, q| acc.saturating_add(q.points()))
    }

    /// The question being shown. `None` unless the quiz is active.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.status == Status::Active {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}
