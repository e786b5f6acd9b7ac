use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use quiz_core::{EventKind, QuizError, Session, WireEvent};
use services::{LoadOutcome, QuizLoopService};

/// Final state printed by `replay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub status: String,
    pub num_questions: usize,
    pub current_index: usize,
    pub selected_answer: Option<usize>,
    pub score: u32,
    pub max_possible_points: u32,
    pub high_score: u32,
    pub seconds_remaining: Option<u32>,
}

impl From<&Session> for Snapshot {
    fn from(session: &Session) -> Self {
        Self {
            status: session.status().to_string(),
            num_questions: session.num_questions(),
            current_index: session.current_index(),
            selected_answer: session.selected_answer(),
            score: session.score(),
            max_possible_points: session.max_possible_points(),
            high_score: session.high_score(),
            seconds_remaining: session.seconds_remaining(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read events from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("events must be a JSON array: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("loaded questions were rejected: {0}")]
    Load(#[source] QuizError),
    #[error("event #{position} rejected: {source}")]
    Rejected {
        position: usize,
        #[source]
        source: QuizError,
    },
}

pub fn parse_events(body: &str) -> Result<Vec<WireEvent>, ReplayError> {
    serde_json::from_str(body).map_err(ReplayError::Decode)
}

pub async fn read_events(path: &Path) -> Result<Vec<WireEvent>, ReplayError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_events(&body)
}

// Scripts that settle the load themselves skip the configured source.
fn supplies_data(events: &[WireEvent]) -> bool {
    events.iter().any(|wire| {
        matches!(
            EventKind::from_name(&wire.kind),
            Some(EventKind::DataReceived | EventKind::DataFailed)
        )
    })
}

/// Run `events` through a fresh machine and report where it ended up.
///
/// Stops at the first rejected event.
pub async fn replay(
    quiz_loop: &QuizLoopService,
    events: Vec<WireEvent>,
) -> Result<Snapshot, ReplayError> {
    let mut machine = quiz_loop.new_machine();

    if !supplies_data(&events) {
        let outcome = quiz_loop
            .load_into(&mut machine)
            .await
            .map_err(ReplayError::Load)?;
        if let LoadOutcome::Loaded { count } = outcome {
            tracing::debug!(count, "replay loaded questions from source");
        }
    }

    let total = events.len();
    for (position, wire) in events.into_iter().enumerate() {
        machine
            .submit_wire(wire)
            .map_err(|source| ReplayError::Rejected { position, source })?;
    }
    tracing::info!(events = total, status = %machine.current_state().status(), "replay finished");

    Ok(Snapshot::from(machine.current_state()))
}
