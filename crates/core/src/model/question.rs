use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a single question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct option {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

/// Errors raised while decoding a question list payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionListError {
    #[error("malformed question payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("question payload is empty")]
    Empty,

    #[error("invalid question at position {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_option: usize,
    points: u32,
}

impl Question {
    /// Build a question from its parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, fewer than two options are
    /// given, or `correct_option` does not index into `options`. Option labels
    /// are taken as they come, blank ones included.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        points: u32,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            correct_option,
            points,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

//
// ─── WIRE RECORD ──────────────────────────────────────────────────────────────
//

/// Question shape served by the question endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub points: u32,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.question,
            record.options,
            record.correct_option,
            record.points,
        )
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        Self {
            question: question.text.clone(),
            options: question.options.clone(),
            correct_option: question.correct_option,
            points: question.points,
        }
    }
}

/// Validate a batch of wire records, keeping their order.
///
/// # Errors
///
/// Returns `QuestionListError::Empty` for an empty batch and
/// `QuestionListError::Invalid` for the first record that fails validation.
pub fn questions_from_records(
    records: Vec<QuestionRecord>,
) -> Result<Vec<Question>, QuestionListError> {
    if records.is_empty() {
        return Err(QuestionListError::Empty);
    }
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record).map_err(|source| QuestionListError::Invalid { index, source })
        })
        .collect()
}

/// Decode a JSON array of question records.
///
/// # Errors
///
/// Returns `QuestionListError` if the payload is not a JSON array of records,
/// is empty, or contains an invalid question.
pub fn parse_question_list(payload: &str) -> Result<Vec<Question>, QuestionListError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(payload)?;
    questions_from_records(records)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
