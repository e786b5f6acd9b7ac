mod question;
mod session;

pub use question::{
    Question, QuestionError, QuestionListError, QuestionRecord, parse_question_list,
    questions_from_records,
};
pub use session::{Session, Status};
