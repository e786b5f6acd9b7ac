use quiz_core::{Session, Status};

/// Header numbers shown above an active question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub question_number: usize,
    pub num_questions: usize,
    pub score: u32,
    pub max_possible_points: u32,
    /// Value for the progress bar; the current question counts as reached.
    pub progress_value: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionFeedback {
    Pending,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    pub feedback: OptionFeedback,
}

impl OptionVm {
    /// Buttons lock once any option was picked.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.feedback != OptionFeedback::Pending
    }

    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("btn btn-option");
        if self.selected {
            class.push_str(" answer");
        }
        match self.feedback {
            OptionFeedback::Pending => {}
            OptionFeedback::Correct => class.push_str(" correct"),
            OptionFeedback::Wrong => class.push_str(" wrong"),
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub text: String,
    pub options: Vec<OptionVm>,
    pub has_answered: bool,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishVm {
    pub score: u32,
    pub max_possible_points: u32,
    pub percentage: u32,
    pub high_score: u32,
    pub emoji: &'static str,
}

#[must_use]
pub fn map_progress(session: &Session) -> Option<ProgressVm> {
    if session.status() != Status::Active {
        return None;
    }
    let index = session.current_index();
    Some(ProgressVm {
        question_number: index + 1,
        num_questions: session.num_questions(),
        score: session.score(),
        max_possible_points: session.max_possible_points(),
        progress_value: index + 1,
    })
}

#[must_use]
pub fn map_question(session: &Session) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let selected = session.selected_answer();
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let feedback = match selected {
                None => OptionFeedback::Pending,
                Some(_) if question.is_correct(index) => OptionFeedback::Correct,
                Some(_) => OptionFeedback::Wrong,
            };
            OptionVm {
                index,
                label: label.clone(),
                selected: selected == Some(index),
                feedback,
            }
        })
        .collect();

    Some(QuestionVm {
        text: question.text().to_string(),
        options,
        has_answered: session.has_answered(),
        is_last: session.is_last_question(),
    })
}

#[must_use]
pub fn map_finish(session: &Session) -> FinishVm {
    let score = session.score();
    let max_possible_points = session.max_possible_points();
    let percentage = percentage(score, max_possible_points);
    FinishVm {
        score,
        max_possible_points,
        percentage,
        high_score: session.high_score(),
        emoji: finish_emoji(percentage),
    }
}

fn percentage(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let pct = u64::from(score) * 100 / u64::from(max);
    u32::try_from(pct).unwrap_or(100)
}

fn finish_emoji(percentage: u32) -> &'static str {
    match percentage {
        100..=u32::MAX => "🥇",
        80..=99 => "🎉",
        50..=79 => "🙃",
        1..=49 => "🤨",
        0 => "🤦",
    }
}
