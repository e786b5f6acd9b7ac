mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    FinishVm, OptionFeedback, OptionVm, ProgressVm, QuestionVm, map_finish, map_progress,
    map_question,
};
pub use time_fmt::format_timer;
