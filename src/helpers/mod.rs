mod questions;
pub use questions::Answer;
pub use questions::AnswerRecord;
pub use questions::CompletedTest;
pub use questions::Operator;
pub use questions::Question;
pub use questions::QuestionBank;
pub use questions::Test;
pub use questions::TestCollection;

pub mod backend;
pub mod router;

mod app_state;
pub use app_state::AppState;
